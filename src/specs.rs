use serde::{Deserialize, Serialize};

use crate::Result;

fn default_beta() -> f64 {
    1.
}

/// The specification for the `ActFn` enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    #[default]
    Identity,
    SoftPlus {
        #[serde(default = "default_beta")]
        beta: f64,
    },
}

/// The options shared by the quasi-Newton adapters, anything left out keeps the
/// adapter's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuasiNewtonSpec {
    pub max_iter: Option<u64>,
    pub gtol: Option<f64>,
    pub ftol: Option<f64>,
    /// Estimate the gradient instead of asking the objective for it.
    #[serde(default)]
    pub finite_difference: bool,
}

/// The specification for the `LimitedMemoryBfgs` adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LbfgsSpec {
    pub memory: Option<usize>,
    #[serde(flatten)]
    pub options: QuasiNewtonSpec,
}

/// The specification for the `Solver` trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverSpec {
    Bfgs(QuasiNewtonSpec),
    Lbfgs(LbfgsSpec),
    SteepestGradientDescent { step_size: f64, max_runs: u64 },
}

/// How an LVQ model transforms its scores and fits its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LvqSpec {
    #[serde(default)]
    pub activation: ActFnSpec,
    pub solver: SolverSpec,
}

impl LvqSpec {
    /// Parses a spec out of its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
