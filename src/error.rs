use crate::interpolation::InterpolationError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RiesError {
    #[error("state `{state}` has no partial width for a decay to `{to}`")]
    MissingPartialWidth { state: String, to: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown element `{0}`")]
    UnknownElement(String),

    #[error("no convergence after {iterations} iterations (last estimate {estimate})")]
    NoConvergence { iterations: usize, estimate: f64 },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Interpolation failed")]
    Interpolation(#[from] InterpolationError),
}

pub type Result<T> = std::result::Result<T, RiesError>;
