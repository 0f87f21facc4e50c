mod bfgs;
mod lbfgs;
mod objective;
mod options;
mod problem;
mod quasi_newton;
mod solver;
mod steepest_gradient_descent;

pub use bfgs::BroydenFletcherGoldfarbShanno;
pub use lbfgs::{DEFAULT_MEMORY, LimitedMemoryBfgs};
pub use objective::Objective;
pub use options::{Jacobian, LineSearchOptions, SolverOptions};
pub use quasi_newton::Method;
pub use solver::{IterationReport, PointCallback, ReportCallback, Solution, Solver};
pub use steepest_gradient_descent::SteepestGradientDescent;
