use thiserror::Error;

/// Typed failure of the trend predictor.
///
/// Both variants belong to the "invalid input" family: the call is rejected as
/// a whole instead of producing NaN/Infinity values downstream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// Fewer than two observations, zero-variance years, or a fit that would
    /// not be finite.
    #[error("Degenerate series: {reason}")]
    DegenerateSeries { reason: String },

    /// Negative projection horizon.
    #[error("Invalid horizon {horizon}: must be >= 0")]
    BadHorizon { horizon: i64 },
}

impl PredictError {
    pub fn degenerate(reason: impl Into<String>) -> Self {
        PredictError::DegenerateSeries {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PredictError::DegenerateSeries { .. } | PredictError::BadHorizon { .. }
        )
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        AppError::new(4, format!("Prediction failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
