use ndarray::{Array, ArrayBase, Data, Dimension};

/// An elementwise transfer function applied to the scores of an LVQ model before they're
/// summed into its cost.
pub trait Activation {
    /// The function at a single point.
    fn f(&self, x: f64) -> f64;

    /// The function's derivative at a single point.
    fn df(&self, x: f64) -> f64;

    /// Evaluates the function on every element of `x`.
    ///
    /// # Arguments
    /// * `x` - An array of any shape.
    ///
    /// # Returns
    /// A new array with the same shape as `x`.
    fn value<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
        Self: Sized,
    {
        x.mapv(|x| self.f(x))
    }

    /// Evaluates the function's derivative on every element of `x`.
    ///
    /// # Arguments
    /// * `x` - An array of any shape.
    ///
    /// # Returns
    /// A new array with the same shape as `x`.
    fn gradient<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
        Self: Sized,
    {
        x.mapv(|x| self.df(x))
    }
}
