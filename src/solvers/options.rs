use ndarray::ArrayView1;

use super::PointCallback;

/// Where the quasi-Newton adapters take the gradient from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Jacobian {
    /// The objective's analytic gradient.
    #[default]
    Objective,
    /// A forward finite difference estimate of the cost, for objectives without an
    /// analytic gradient.
    FiniteDifference,
}

/// Wolfe conditions constants for the line search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSearchOptions {
    /// Sufficient decrease.
    pub c1: f64,
    /// Curvature.
    pub c2: f64,
}

impl Default for LineSearchOptions {
    fn default() -> Self {
        Self { c1: 1e-4, c2: 0.9 }
    }
}

/// The options the quasi-Newton adapters hand over to the optimizer.
pub struct SolverOptions {
    pub jac: Jacobian,
    /// Defaults to `200` times the number of parameters.
    pub max_iter: Option<u64>,
    /// The run converges once the gradient's norm drops below this.
    pub gtol: f64,
    /// The run converges once the cost changes less than this between iterations.
    pub ftol: Option<f64>,
    /// The run stops once the cost reaches this.
    pub target_cost: Option<f64>,
    pub line_search: LineSearchOptions,
    /// Called once per iteration with the current point.
    pub callback: Option<PointCallback>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            jac: Jacobian::default(),
            max_iter: None,
            gtol: 1e-5,
            ftol: None,
            target_cost: None,
            line_search: LineSearchOptions::default(),
            callback: None,
        }
    }
}

impl SolverOptions {
    pub fn with_jac(mut self, jac: Jacobian) -> Self {
        self.jac = jac;
        self
    }

    pub fn with_max_iter(mut self, max_iter: u64) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn with_gtol(mut self, gtol: f64) -> Self {
        self.gtol = gtol;
        self
    }

    pub fn with_ftol(mut self, ftol: f64) -> Self {
        self.ftol = Some(ftol);
        self
    }

    pub fn with_target_cost(mut self, target_cost: f64) -> Self {
        self.target_cost = Some(target_cost);
        self
    }

    pub fn with_line_search(mut self, line_search: LineSearchOptions) -> Self {
        self.line_search = line_search;
        self
    }

    /// Sets the per iteration callback.
    ///
    /// # Arguments
    /// * `callback` - Receives the current point, and nothing else, after every iteration.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ArrayView1<f64>) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }
}
