use thiserror::Error;

pub type DetectionResult<T> = Result<T, DetectionError>;

#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Invalid Parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl DetectionError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
