use crate::errors::service::ServiceError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        let status = match err {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Validation(_) => "validation_error",
            ServiceError::Forbidden(_) => "forbidden",
            _ => "error",
        };

        ErrorResponse {
            status: status.to_string(),
            message: err.to_string(),
        }
    }
}
