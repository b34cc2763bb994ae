use foundation::RatioError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Input outside the domain of the computation.
    InvalidArgument(String),
    /// Computation divided by a zero count.
    DivisionByZero,
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::InvalidArgument(msg) => write!(f, "{msg}"),
            AnalysisError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<RatioError> for AnalysisError {
    fn from(err: RatioError) -> Self {
        AnalysisError::InvalidArgument(err.to_string())
    }
}
