//! Scenario files: several named requests evaluated as one batch.
//!
//! ```toml
//! [[scenario]]
//! name = "add to winner"
//! mode = "guarded"
//! position_type = "long"
//! initial_price = 100.0
//! initial_quantity = 50.0
//! new_price = 120.0
//! desired_average_price = 110.0
//! ```
//!
//! Each scenario is independent: a failing one does not stop the batch, and
//! parallel evaluation gives the same outcomes, in the same order, as serial.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::calculator::{AdjustmentRequest, CalculatorMode};
use crate::domain::{Adjustment, Quantity, TradeAction};
use crate::error::AdjustError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("read scenario file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("scenario file contains no [[scenario]] entries")]
    Empty,
}

/// A named request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScenario")]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub request: AdjustmentRequest,
}

/// On-disk shape of a scenario. The request keys are collected first and
/// deserialized on their own, since unknown-key checks do not survive
/// `flatten`.
#[derive(Deserialize)]
struct RawScenario {
    name: String,
    #[serde(flatten)]
    fields: toml::Table,
}

impl TryFrom<RawScenario> for Scenario {
    type Error = toml::de::Error;

    fn try_from(raw: RawScenario) -> Result<Self, Self::Error> {
        let request = toml::Value::Table(raw.fields).try_into::<AdjustmentRequest>()?;
        Ok(Self {
            name: raw.name,
            request,
        })
    }
}

impl Scenario {
    pub fn evaluate(&self) -> ScenarioOutcome {
        ScenarioOutcome {
            name: self.name.clone(),
            request: self.request.clone(),
            result: self.request.evaluate(),
        }
    }
}

/// All scenarios from one file, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    #[serde(rename = "scenario", default)]
    pub scenarios: Vec<Scenario>,
}

impl ScenarioFile {
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_toml(&content)?;
        debug!(path = %path.display(), scenarios = file.scenarios.len(), "loaded scenario file");
        Ok(file)
    }

    pub fn from_toml(content: &str) -> Result<Self, ScenarioError> {
        let file: Self = toml::from_str(content)?;
        if file.scenarios.is_empty() {
            return Err(ScenarioError::Empty);
        }
        Ok(file)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Evaluate every scenario. Output order always matches file order.
    pub fn evaluate(&self, parallel: bool) -> Vec<ScenarioOutcome> {
        if parallel {
            self.scenarios.par_iter().map(Scenario::evaluate).collect()
        } else {
            self.scenarios.iter().map(Scenario::evaluate).collect()
        }
    }
}

/// Result of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub request: AdjustmentRequest,
    pub result: Result<Adjustment, AdjustError>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Flatten into a single row for JSON or CSV output.
    pub fn to_record(&self) -> OutcomeRecord {
        let mut record = OutcomeRecord {
            name: self.name.clone(),
            mode: self.request.mode(),
            quantity: None,
            action: None,
            resulting_average: None,
            error_kind: None,
            error: None,
        };
        match &self.result {
            Ok(adj) => {
                record.quantity = Some(without_negative_zero(adj.quantity));
                record.action = Some(adj.action());
                record.resulting_average = self
                    .request
                    .holding()
                    .projected_average(self.request.new_price(), adj.as_f64())
                    .map(|avg| avg + 0.0);
            }
            Err(err) => {
                record.error_kind = Some(err.kind());
                record.error = Some(err.message().to_string());
            }
        }
        record
    }
}

// -0.0 + 0.0 == +0.0
fn without_negative_zero(quantity: Quantity) -> Quantity {
    match quantity {
        Quantity::Fractional(q) => Quantity::Fractional(q + 0.0),
        whole => whole,
    }
}

/// Flat, serializable view of a [`ScenarioOutcome`]. The quantity keeps its
/// whole/fractional form so guarded results serialize as integers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRecord {
    pub name: String,
    pub mode: CalculatorMode,
    pub quantity: Option<Quantity>,
    pub action: Option<TradeAction>,
    pub resulting_average: Option<f64>,
    pub error_kind: Option<&'static str>,
    pub error: Option<String>,
}
