use ndarray::ArrayView1;

use super::{Method, Objective, Solution, Solver, SolverOptions, quasi_newton::QuasiNewton};
use crate::Result;

/// How many correction pairs are kept unless told otherwise.
pub const DEFAULT_MEMORY: usize = 10;

/// Exposes argmin's limited memory BFGS under the `Solver` interface. Suited for models
/// with many parameters, where BFGS' dense inverse Hessian gets too big.
///
/// Like `BroydenFletcherGoldfarbShanno`, the callback is invoked with the current point
/// only.
pub struct LimitedMemoryBfgs<O> {
    inner: QuasiNewton<O>,
}

impl<O: Objective> LimitedMemoryBfgs<O> {
    /// Creates a new `LimitedMemoryBfgs` solver keeping `DEFAULT_MEMORY` correction pairs.
    ///
    /// # Arguments
    /// * `objective` - The function to minimize.
    /// * `options` - Everything but the method, which is always L-BFGS.
    pub fn new(objective: O, options: SolverOptions) -> Self {
        Self::with_memory(objective, DEFAULT_MEMORY, options)
    }

    /// Creates a new `LimitedMemoryBfgs` solver.
    ///
    /// # Arguments
    /// * `objective` - The function to minimize.
    /// * `memory` - The amount of correction pairs used to approximate the Hessian.
    /// * `options` - Everything but the method, which is always L-BFGS.
    pub fn with_memory(objective: O, memory: usize, options: SolverOptions) -> Self {
        Self {
            inner: QuasiNewton::new(objective, Method::Lbfgs { memory }, options),
        }
    }

    pub fn method(&self) -> Method {
        self.inner.method()
    }
}

impl<O: Objective> Solver for LimitedMemoryBfgs<O> {
    fn minimize(&mut self, initial: ArrayView1<f64>) -> Result<Solution> {
        self.inner.run(initial)
    }
}
