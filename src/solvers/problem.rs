//! Glue between the crate's `Objective` and argmin's problem and observer traits.

use argmin::core::{CostFunction, Error, Gradient, KV, State, observers::Observe};
use finitediff::FiniteDiff;
use ndarray::{Array1, ArrayView1};

use super::{IterationReport, Jacobian, Objective};
use crate::LvqErr;

/// argmin's view of an `Objective`.
pub(crate) struct ObjectiveProblem<'a, O: ?Sized> {
    objective: &'a O,
    jac: Jacobian,
}

impl<'a, O: Objective + ?Sized> ObjectiveProblem<'a, O> {
    pub(crate) fn new(objective: &'a O, jac: Jacobian) -> Self {
        Self { objective, jac }
    }
}

impl<O: Objective + ?Sized> CostFunction for ObjectiveProblem<'_, O> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.objective.cost(ArrayView1::from(param)))
    }
}

impl<O: Objective + ?Sized> Gradient for ObjectiveProblem<'_, O> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, param: &Self::Param) -> Result<Self::Gradient, Error> {
        match self.jac {
            Jacobian::Objective => {
                let grad = self
                    .objective
                    .gradient(ArrayView1::from(param))
                    .ok_or(LvqErr::MissingGradient)?;

                if grad.len() != param.len() {
                    return Err(LvqErr::InvalidArgument(format!(
                        "the objective's gradient has {} entries for {} parameters",
                        grad.len(),
                        param.len()
                    ))
                    .into());
                }

                Ok(grad.to_vec())
            }
            Jacobian::FiniteDifference => {
                Ok(param.forward_diff(&|x: &Vec<f64>| self.objective.cost(ArrayView1::from(x))))
            }
        }
    }
}

/// Builds an `IterationReport` out of argmin's state after every iteration and hands it
/// to `on_report`.
pub(crate) struct ReportObserver<F> {
    iteration: u64,
    on_report: F,
}

impl<F> ReportObserver<F>
where
    F: FnMut(&IterationReport),
{
    pub(crate) fn new(on_report: F) -> Self {
        Self {
            iteration: 0,
            on_report,
        }
    }
}

impl<I, F> Observe<I> for ReportObserver<F>
where
    I: State<Param = Vec<f64>, Float = f64>,
    F: FnMut(&IterationReport),
{
    fn observe_iter(&mut self, state: &I, _kv: &KV) -> Result<(), Error> {
        self.iteration += 1;

        let Some(param) = state.get_param() else {
            return Ok(());
        };

        let report = IterationReport {
            iteration: self.iteration,
            point: Array1::from(param.clone()),
            cost: state.get_cost(),
        };
        (self.on_report)(&report);

        Ok(())
    }
}
