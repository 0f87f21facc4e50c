use log::{debug, info, warn};
use ndarray::{ArrayView1, Zip};

use super::{IterationReport, Objective, ReportCallback, Solution, Solver, solver::check_initial};
use crate::{LvqErr, Result};

/// Batch gradient descent with a fixed step size.
///
/// Being native, it hands the callback the whole `IterationReport` instead of just the
/// point.
pub struct SteepestGradientDescent<O> {
    objective: O,
    step_size: f64,
    max_runs: u64,
    gtol: f64,
    callback: Option<ReportCallback>,
}

impl<O: Objective> SteepestGradientDescent<O> {
    /// Creates a new `SteepestGradientDescent` solver.
    ///
    /// # Arguments
    /// * `objective` - The function to minimize, it must provide its gradient.
    /// * `step_size` - The *length* of the steps taken along the negative gradient.
    /// * `max_runs` - The maximum amount of steps.
    ///
    /// # Returns
    /// A new `SteepestGradientDescent` or `LvqErr::InvalidArgument` if `step_size` isn't
    /// positive.
    pub fn new(objective: O, step_size: f64, max_runs: u64) -> Result<Self> {
        if !(step_size > 0.) || !step_size.is_finite() {
            return Err(LvqErr::InvalidArgument(format!(
                "the step size should be positive, got {step_size}"
            )));
        }

        Ok(Self {
            objective,
            step_size,
            max_runs,
            gtol: 1e-5,
            callback: None,
        })
    }

    /// Stops once the gradient's norm drops below `gtol`.
    pub fn with_gtol(mut self, gtol: f64) -> Self {
        self.gtol = gtol;
        self
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&IterationReport) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl<O: Objective> Solver for SteepestGradientDescent<O> {
    fn minimize(&mut self, initial: ArrayView1<f64>) -> Result<Solution> {
        check_initial(initial)?;

        debug!(dim = initial.len(), max_runs = self.max_runs; "starting steepest gradient descent");

        let lr = self.step_size;
        let mut params = initial.to_owned();
        let mut cost_evals = 0;
        let mut gradient_evals = 0;
        let mut converged = false;
        let mut run = 0;

        while run < self.max_runs {
            let grad = self
                .objective
                .gradient(params.view())
                .ok_or(LvqErr::MissingGradient)?;
            gradient_evals += 1;

            if grad.len() != params.len() {
                return Err(LvqErr::InvalidArgument(format!(
                    "the objective's gradient has {} entries for {} parameters",
                    grad.len(),
                    params.len()
                )));
            }

            if grad.dot(&grad).sqrt() <= self.gtol {
                converged = true;
                break;
            }

            Zip::from(&mut params)
                .and(&grad)
                .for_each(|p, g| *p -= lr * g);
            run += 1;

            if let Some(callback) = self.callback.as_mut() {
                let report = IterationReport {
                    iteration: run,
                    point: params.clone(),
                    cost: self.objective.cost(params.view()),
                };
                cost_evals += 1;
                callback(&report);
            }
        }

        let cost = self.objective.cost(params.view());
        cost_evals += 1;

        let termination = if converged {
            info!(iterations = run, cost = cost; "steepest gradient descent converged");
            "Solver converged"
        } else {
            warn!(iterations = run, cost = cost; "steepest gradient descent ran out of steps");
            "Maximum number of iterations reached"
        };

        Ok(Solution {
            point: params,
            cost,
            iterations: run,
            converged,
            termination: termination.to_string(),
            cost_evals,
            gradient_evals,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ndarray::{Array1, array};
    use parking_lot::Mutex;

    use super::*;

    /// `|x - c|^2`
    struct Sphere {
        center: Array1<f64>,
    }

    impl Objective for Sphere {
        fn cost(&self, x: ArrayView1<f64>) -> f64 {
            let d = &x - &self.center;
            d.dot(&d)
        }

        fn gradient(&self, x: ArrayView1<f64>) -> Option<Array1<f64>> {
            Some((&x - &self.center) * 2.)
        }
    }

    struct CostOnly;

    impl Objective for CostOnly {
        fn cost(&self, x: ArrayView1<f64>) -> f64 {
            x.sum()
        }
    }

    fn sphere() -> Sphere {
        Sphere {
            center: array![1., -1., 3.],
        }
    }

    #[test]
    fn rejects_bad_step_size() {
        for step_size in [0., -0.1, f64::NAN] {
            assert!(matches!(
                SteepestGradientDescent::new(sphere(), step_size, 10),
                Err(LvqErr::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn converges_on_sphere() {
        let mut solver = SteepestGradientDescent::new(sphere(), 0.25, 1000).unwrap();
        let solution = solver.minimize(array![0., 0., 0.].view()).unwrap();

        assert!(solution.converged);
        assert!(solution.cost < 1e-10);
        assert!(solution.point.iter().zip(&sphere().center).all(|(a, b)| (a - b).abs() < 1e-5));
    }

    #[test]
    fn callback_gets_the_full_report() {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reports);

        let mut solver = SteepestGradientDescent::new(sphere(), 0.1, 5)
            .unwrap()
            .with_callback(move |report| sink.lock().push(report.clone()));
        let solution = solver.minimize(array![0., 0., 0.].view()).unwrap();

        let reports = reports.lock();
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 5);
        assert_eq!(reports.len(), 5);

        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.iteration, i as u64 + 1);
            assert!((report.cost - sphere().cost(report.point.view())).abs() < 1e-12);
        }
        assert!(reports.windows(2).all(|w| w[1].cost < w[0].cost));
        assert_eq!(reports[4].point, solution.point);
    }

    #[test]
    fn needs_a_gradient() {
        let mut solver = SteepestGradientDescent::new(CostOnly, 0.1, 5).unwrap();

        assert!(matches!(
            solver.minimize(array![0.].view()),
            Err(LvqErr::MissingGradient)
        ));
    }
}
