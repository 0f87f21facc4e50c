use ndarray::{Array1, ArrayView1};

/// The function a `Solver` minimizes, usually an LVQ model's cost over its flattened
/// parameters.
pub trait Objective {
    /// The cost at `params`.
    fn cost(&self, params: ArrayView1<f64>) -> f64;

    /// The analytic gradient at `params`.
    ///
    /// # Returns
    /// `None` when the objective can't be differentiated by formula, e.g. when it's built
    /// on a custom distance. Solvers then need to estimate it themselves.
    fn gradient(&self, _params: ArrayView1<f64>) -> Option<Array1<f64>> {
        None
    }
}

impl<T: Objective + ?Sized> Objective for &T {
    fn cost(&self, params: ArrayView1<f64>) -> f64 {
        (**self).cost(params)
    }

    fn gradient(&self, params: ArrayView1<f64>) -> Option<Array1<f64>> {
        (**self).gradient(params)
    }
}

impl<T: Objective + ?Sized> Objective for Box<T> {
    fn cost(&self, params: ArrayView1<f64>) -> f64 {
        (**self).cost(params)
    }

    fn gradient(&self, params: ArrayView1<f64>) -> Option<Array1<f64>> {
        (**self).gradient(params)
    }
}
