use ndarray::ArrayView1;

use super::{Method, Objective, Solution, Solver, SolverOptions, quasi_newton::QuasiNewton};
use crate::Result;

/// Exposes argmin's BFGS under the `Solver` interface.
///
/// The gradient comes from the objective unless `options.jac` is
/// `Jacobian::FiniteDifference`, which is the way to go for objectives without an
/// analytic gradient, e.g. those built on a custom distance.
///
/// Unlike the native solvers, the callback is invoked with the current point only.
pub struct BroydenFletcherGoldfarbShanno<O> {
    inner: QuasiNewton<O>,
}

impl<O: Objective> BroydenFletcherGoldfarbShanno<O> {
    /// Creates a new `BroydenFletcherGoldfarbShanno` solver.
    ///
    /// # Arguments
    /// * `objective` - The function to minimize.
    /// * `options` - Everything but the method, which is always BFGS.
    pub fn new(objective: O, options: SolverOptions) -> Self {
        Self {
            inner: QuasiNewton::new(objective, Method::Bfgs, options),
        }
    }

    pub fn method(&self) -> Method {
        self.inner.method()
    }
}

impl<O: Objective> Solver for BroydenFletcherGoldfarbShanno<O> {
    fn minimize(&mut self, initial: ArrayView1<f64>) -> Result<Solution> {
        self.inner.run(initial)
    }
}
