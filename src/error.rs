use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, LvqErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum LvqErr {
    /// A component was configured with a value outside of its domain.
    InvalidParameter {
        type_name: &'static str,
        name: &'static str,
        value: f64,
    },
    /// A call received an argument it can't work with.
    InvalidArgument(String),
    /// The solver was told to use the objective's gradient but the objective has none.
    MissingGradient,
    /// Whatever the external optimizer reported, untouched.
    ExternalOptimizer(anyhow::Error),
    /// A spec couldn't be parsed.
    Spec(serde_json::Error),
}

impl Display for LvqErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LvqErr::InvalidParameter {
                type_name,
                name,
                value,
            } => write!(
                f,
                "The activation function {type_name} expects {name} > 0, but got {name} = {value}"
            ),
            LvqErr::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            LvqErr::MissingGradient => write!(
                f,
                "the objective has no analytic gradient, use finite differences instead"
            ),
            LvqErr::ExternalOptimizer(e) => write!(f, "optimizer failure: {e}"),
            LvqErr::Spec(e) => write!(f, "invalid spec: {e}"),
        }
    }
}

impl Error for LvqErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LvqErr::ExternalOptimizer(e) => Some(&**e),
            LvqErr::Spec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LvqErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Spec(e)
    }
}

impl From<anyhow::Error> for LvqErr {
    /// Recovers one of our own errors when it travelled through the optimizer, anything
    /// else is the optimizer's.
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<LvqErr>() {
            Ok(err) => err,
            Err(e) => Self::ExternalOptimizer(e),
        }
    }
}
