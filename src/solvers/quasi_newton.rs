use std::sync::Arc;

use argmin::{
    core::{
        Executor, IterState, State, TerminationReason, TerminationStatus, observers::ObserverMode,
    },
    solver::{
        linesearch::MoreThuenteLineSearch,
        quasinewton::{BFGS, LBFGS},
    },
};
use argmin_math::ArgminEye;
use log::{debug, info, warn};
use ndarray::{Array1, ArrayView1};
use parking_lot::Mutex;

use super::{
    IterationReport, Objective, PointCallback, Solution, SolverOptions,
    problem::{ObjectiveProblem, ReportObserver},
    solver::check_initial,
};
use crate::Result;

type Param = Vec<f64>;
type LineSearch = MoreThuenteLineSearch<Param, Param, f64>;
type BfgsState = IterState<Param, Param, (), Vec<Vec<f64>>, (), f64>;
type LbfgsState = IterState<Param, Param, (), (), (), f64>;

/// The quasi-Newton method argmin runs for an adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Bfgs,
    Lbfgs { memory: usize },
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Bfgs => "BFGS",
            Method::Lbfgs { .. } => "L-BFGS",
        }
    }
}

/// Runs one of argmin's quasi-Newton solvers on an `Objective`. The concrete adapters
/// only pick the `Method`.
pub(crate) struct QuasiNewton<O> {
    objective: O,
    method: Method,
    options: SolverOptions,
    callback: Option<Arc<Mutex<PointCallback>>>,
}

impl<O: Objective> QuasiNewton<O> {
    pub(crate) fn new(objective: O, method: Method, mut options: SolverOptions) -> Self {
        let callback = options
            .callback
            .take()
            .map(|callback| Arc::new(Mutex::new(callback)));

        Self {
            objective,
            method,
            options,
            callback,
        }
    }

    pub(crate) fn method(&self) -> Method {
        self.method
    }

    pub(crate) fn run(&mut self, initial: ArrayView1<f64>) -> Result<Solution> {
        check_initial(initial)?;

        let x0 = initial.to_vec();
        let n = x0.len();
        let max_iters = self.options.max_iter.unwrap_or(200 * n as u64);

        debug!(
            method = self.method.name(),
            dim = n,
            max_iters = max_iters;
            "starting minimization"
        );

        let solution = match self.method {
            Method::Bfgs => self.run_bfgs(x0, max_iters)?,
            Method::Lbfgs { memory } => self.run_lbfgs(x0, memory, max_iters)?,
        };

        if solution.converged {
            info!(
                method = self.method.name(),
                iterations = solution.iterations,
                cost = solution.cost;
                "minimization finished: {}", solution.termination
            );
        } else {
            warn!(
                method = self.method.name(),
                iterations = solution.iterations,
                cost = solution.cost;
                "minimization stopped without converging: {}", solution.termination
            );
        }

        Ok(solution)
    }

    fn run_bfgs(&self, x0: Param, max_iters: u64) -> Result<Solution> {
        let mut solver = BFGS::new(self.line_search()?).with_tolerance_grad(self.options.gtol)?;
        if let Some(ftol) = self.options.ftol {
            solver = solver.with_tolerance_cost(ftol)?;
        }

        let inv_hessian = Vec::<Vec<f64>>::eye(x0.len());
        let target_cost = self.options.target_cost.unwrap_or(f64::NEG_INFINITY);
        let problem = ObjectiveProblem::new(&self.objective, self.options.jac);

        let mut executor = Executor::new(problem, solver).configure(|state: BfgsState| {
            state
                .param(x0.clone())
                .inv_hessian(inv_hessian)
                .max_iters(max_iters)
                .target_cost(target_cost)
        });
        if let Some(callback) = &self.callback {
            executor = executor.add_observer(
                point_observer(Arc::clone(callback)),
                ObserverMode::Always,
            );
        }

        let res = executor.run()?;
        Ok(solution_from(res.state(), x0))
    }

    fn run_lbfgs(&self, x0: Param, memory: usize, max_iters: u64) -> Result<Solution> {
        let mut solver =
            LBFGS::new(self.line_search()?, memory).with_tolerance_grad(self.options.gtol)?;
        if let Some(ftol) = self.options.ftol {
            solver = solver.with_tolerance_cost(ftol)?;
        }

        let target_cost = self.options.target_cost.unwrap_or(f64::NEG_INFINITY);
        let problem = ObjectiveProblem::new(&self.objective, self.options.jac);

        let mut executor = Executor::new(problem, solver).configure(|state: LbfgsState| {
            state
                .param(x0.clone())
                .max_iters(max_iters)
                .target_cost(target_cost)
        });
        if let Some(callback) = &self.callback {
            executor = executor.add_observer(
                point_observer(Arc::clone(callback)),
                ObserverMode::Always,
            );
        }

        let res = executor.run()?;
        Ok(solution_from(res.state(), x0))
    }

    fn line_search(&self) -> Result<LineSearch> {
        let c = self.options.line_search;
        Ok(MoreThuenteLineSearch::new().with_c(c.c1, c.c2)?)
    }
}

/// The optimizer reports every iteration in full, `callback` only gets to see the point.
fn point_observer(
    callback: Arc<Mutex<PointCallback>>,
) -> ReportObserver<impl FnMut(&IterationReport) + 'static> {
    ReportObserver::new(move |report: &IterationReport| {
        let mut callback = callback.lock();
        (*callback)(report.point.view());
    })
}

/// Reads the final state of an argmin run, `initial` stands in for the best point if the
/// run never got to evaluate one.
fn solution_from<I>(state: &I, initial: Param) -> Solution
where
    I: State<Param = Param, Float = f64>,
{
    let (converged, termination) = match state.get_termination_status() {
        TerminationStatus::Terminated(reason) => (
            matches!(
                reason,
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            ),
            reason.to_string(),
        ),
        TerminationStatus::NotTerminated => (false, "not terminated".to_string()),
    };

    let counts = state.get_func_counts();
    let count = |key: &str| counts.get(key).copied().unwrap_or_default();

    Solution {
        point: Array1::from(state.get_best_param().cloned().unwrap_or(initial)),
        cost: state.get_best_cost(),
        iterations: state.get_iter(),
        converged,
        termination,
        cost_evals: count("cost_count"),
        gradient_evals: count("gradient_count"),
    }
}
