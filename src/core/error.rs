use thiserror::Error;

use crate::shared::types::CommandResponse;

/// Rejections raised by the ticket device itself.
///
/// Both variants leave the device untouched: a failed construction produces
/// no instance and a failed deposit does not change the balance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Render the error as a failed response envelope for the console.
    pub fn into_response(self) -> CommandResponse<()> {
        let (message, errors) = match self {
            AppError::Device(ref e) => {
                tracing::warn!("Device rejected request: {}", e);
                (e.to_string(), Some(vec![e.to_string()]))
            }
            AppError::BadRequest(ref msg) => (msg.clone(), None),
            AppError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                ("Internal error".to_string(), None)
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal error".to_string(), None)
            }
        };

        CommandResponse::<()>::error(Some(message), errors)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_error_display() {
        let err = DeviceError::InvalidAmount("amount must be positive, got -10".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid amount: amount must be positive, got -10"
        );
    }

    #[test]
    fn test_device_error_is_transparent_in_app_error() {
        let err: AppError =
            DeviceError::InvalidConfiguration("ticket price must be positive".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: ticket price must be positive"
        );
    }

    #[test]
    fn test_into_response_hides_internal_details() {
        let response = AppError::Internal("device lock poisoned".to_string()).into_response();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Internal error"));
        assert!(response.errors.is_none());
    }

    #[test]
    fn test_into_response_lists_device_error() {
        let response =
            AppError::from(DeviceError::InvalidAmount("amount must be positive".to_string()))
                .into_response();
        assert!(!response.success);
        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("positive"));
    }
}
