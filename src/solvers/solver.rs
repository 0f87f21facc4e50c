use ndarray::{Array1, ArrayView1};

use crate::{LvqErr, Result};

/// A minimization routine the training loop can drive without knowing which one it is.
pub trait Solver {
    /// Minimizes the solver's objective.
    ///
    /// # Arguments
    /// * `initial` - The starting point.
    ///
    /// # Returns
    /// The optimized point together with the run's diagnostics. Running out of iterations
    /// isn't an error, it's reported through `Solution::converged`.
    fn minimize(&mut self, initial: ArrayView1<f64>) -> Result<Solution>;
}

/// The outcome of a `Solver` run.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The best point found.
    pub point: Array1<f64>,
    /// The cost at `point`.
    pub cost: f64,
    pub iterations: u64,
    /// Whether the run stopped because a tolerance or target was met.
    pub converged: bool,
    /// Why the run stopped.
    pub termination: String,
    pub cost_evals: u64,
    pub gradient_evals: u64,
}

/// What every solver knows about an iteration once it's done.
#[derive(Clone, Debug)]
pub struct IterationReport {
    /// Starts at 1.
    pub iteration: u64,
    pub point: Array1<f64>,
    pub cost: f64,
}

/// Callback receiving only the current point, the contract of the quasi-Newton adapters.
pub type PointCallback = Box<dyn FnMut(ArrayView1<f64>) + Send>;

/// Callback receiving the full `IterationReport`, the contract of the native solvers.
pub type ReportCallback = Box<dyn FnMut(&IterationReport) + Send>;

/// Rejects starting points no solver can start from.
pub(crate) fn check_initial(initial: ArrayView1<f64>) -> Result<()> {
    if initial.is_empty() {
        return Err(LvqErr::InvalidArgument(
            "the initial point is empty".to_string(),
        ));
    }

    if let Some(i) = initial.iter().position(|v| !v.is_finite()) {
        return Err(LvqErr::InvalidArgument(format!(
            "the initial point has a non finite value at index {i}"
        )));
    }

    Ok(())
}
