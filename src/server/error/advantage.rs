use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::BadRequest;

/// Business-rule failures for advantage management.
#[derive(Error, Debug)]
pub enum AdvantageError {
    /// The create request carried no image bytes
    #[error("Image is required")]
    ImageRequired,
    /// The coins field was not a well-formed non-negative number
    #[error("Invalid coins value: {0:?}")]
    InvalidCoins(String),
    /// The enterprise identifier in the create form was not an integer
    #[error("Invalid enterprise ID: {0:?}")]
    InvalidEnterpriseId(String),
    /// The institution identifier in the request path was not an integer
    #[error("Invalid institution ID: {0:?}")]
    InvalidInstitutionId(String),
    /// A required text field was absent from the multipart form
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    /// The referenced enterprise does not exist
    #[error("Enterprise {0} not found")]
    EnterpriseNotFound(i32),
}

/// Every advantage business-rule failure is a client error; the message
/// is surfaced verbatim.
impl IntoResponse for AdvantageError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        BadRequest(self).into_response()
    }
}
