use crate::{
    Result,
    solvers::{
        BroydenFletcherGoldfarbShanno, DEFAULT_MEMORY, Jacobian, LimitedMemoryBfgs, Objective,
        Solver, SolverOptions, SteepestGradientDescent,
    },
    specs::{QuasiNewtonSpec, SolverSpec},
};

/// Builds `Solver`s given a specification.
#[derive(Default)]
pub struct SolverBuilder;

impl SolverBuilder {
    /// Creates a new `SolverBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Solver` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the solver.
    /// * `objective` - The function the solver will minimize.
    pub fn build<'a, O>(&self, spec: &SolverSpec, objective: O) -> Result<Box<dyn Solver + 'a>>
    where
        O: Objective + 'a,
    {
        let solver: Box<dyn Solver + 'a> = match *spec {
            SolverSpec::Bfgs(options) => Box::new(BroydenFletcherGoldfarbShanno::new(
                objective,
                self.resolve_options(options),
            )),
            SolverSpec::Lbfgs(spec) => Box::new(LimitedMemoryBfgs::with_memory(
                objective,
                spec.memory.unwrap_or(DEFAULT_MEMORY),
                self.resolve_options(spec.options),
            )),
            SolverSpec::SteepestGradientDescent {
                step_size,
                max_runs,
            } => Box::new(SteepestGradientDescent::new(objective, step_size, max_runs)?),
        };

        Ok(solver)
    }

    fn resolve_options(&self, spec: QuasiNewtonSpec) -> SolverOptions {
        let mut options = SolverOptions::default();

        if spec.finite_difference {
            options = options.with_jac(Jacobian::FiniteDifference);
        }
        if let Some(max_iter) = spec.max_iter {
            options = options.with_max_iter(max_iter);
        }
        if let Some(gtol) = spec.gtol {
            options = options.with_gtol(gtol);
        }
        if let Some(ftol) = spec.ftol {
            options = options.with_ftol(ftol);
        }

        options
    }
}
