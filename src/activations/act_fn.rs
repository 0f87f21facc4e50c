use super::{Activation, Identity, SoftPlus};
use crate::{LvqErr, Result, specs::ActFnSpec};

/// The activation functions a model can be configured with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActFn {
    Identity(Identity),
    SoftPlus(SoftPlus),
}

impl ActFn {
    pub fn identity() -> Self {
        Self::Identity(Identity::new())
    }

    pub fn soft_plus(beta: f64) -> Result<Self> {
        SoftPlus::new(beta).map(Self::SoftPlus)
    }
}

impl Default for ActFn {
    fn default() -> Self {
        Self::identity()
    }
}

impl Activation for ActFn {
    fn f(&self, x: f64) -> f64 {
        match self {
            Self::Identity(a) => a.f(x),
            Self::SoftPlus(a) => a.f(x),
        }
    }

    fn df(&self, x: f64) -> f64 {
        match self {
            Self::Identity(a) => a.df(x),
            Self::SoftPlus(a) => a.df(x),
        }
    }
}

impl TryFrom<ActFnSpec> for ActFn {
    type Error = LvqErr;

    fn try_from(spec: ActFnSpec) -> Result<Self> {
        match spec {
            ActFnSpec::Identity => Ok(Self::identity()),
            ActFnSpec::SoftPlus { beta } => Self::soft_plus(beta),
        }
    }
}
