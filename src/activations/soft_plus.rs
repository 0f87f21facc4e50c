use super::Activation;
use crate::{LvqErr, Result};

/// The Soft+ function, a smooth ramp whose steepness is controlled by `beta`:
///
/// `f(x) = ln(1 + e^(beta * x))`
///
/// See Villmann et al. (2019), "Activation Functions for Generalized Learning Vector
/// Quantization - A Performance Comparison".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoftPlus {
    beta: f64,
}

impl SoftPlus {
    /// Creates a new `SoftPlus`.
    ///
    /// # Arguments
    /// * `beta` - Controls the steepness of the curve, must be positive and finite.
    ///
    /// # Returns
    /// A new `SoftPlus` or `LvqErr::InvalidParameter` if `beta` is out of range.
    pub fn new(beta: f64) -> Result<Self> {
        if !(beta > 0.) || !beta.is_finite() {
            return Err(LvqErr::InvalidParameter {
                type_name: "SoftPlus",
                name: "beta",
                value: beta,
            });
        }

        Ok(Self { beta })
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Default for SoftPlus {
    fn default() -> Self {
        Self { beta: 1. }
    }
}

/// `1 / (1 + e^-z)` without overflowing on either tail.
fn sigmoid(z: f64) -> f64 {
    if z >= 0. {
        1. / (1. + (-z).exp())
    } else {
        let e = z.exp();
        e / (1. + e)
    }
}

impl Activation for SoftPlus {
    fn f(&self, x: f64) -> f64 {
        // ln(1 + e^z) = max(z, 0) + ln(1 + e^-|z|)
        let z = self.beta * x;
        z.max(0.) + (-z.abs()).exp().ln_1p()
    }

    fn df(&self, x: f64) -> f64 {
        self.beta * sigmoid(self.beta * x)
    }
}
