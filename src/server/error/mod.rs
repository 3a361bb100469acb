//! Error types for the Vantage server application.
//!
//! The domain errors carry a kind discriminator so the controller's
//! status-code mapping is an explicit match rather than string-based
//! inference. All errors implement `IntoResponse` for Axum and use
//! `thiserror` for `Display`/`Error` implementations.

pub mod advantage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::advantage::AdvantageError};

/// Main error type for the Vantage server application.
///
/// Aggregates the domain errors and external library errors into a single
/// unified type, with `#[from]` conversions so `?` works throughout the
/// controller and service layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Business-rule failure while managing advantages.
    #[error(transparent)]
    AdvantageError(#[from] AdvantageError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failure reading a part of the multipart create request.
    #[error(transparent)]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
}

/// Converts application errors into HTTP responses.
///
/// Every error carries its message in a JSON body; no failure response is
/// ever empty. Storage errors surface as a generic 400 with the underlying
/// message, with no retry at this layer. The enterprise-scoped list route
/// overrides this mapping with 404 in its handler.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AdvantageError(err) => err.into_response(),
            Self::DbErr(err) => {
                tracing::error!("{}", err);

                BadRequest(err).into_response()
            }
            Self::MultipartError(err) => BadRequest(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 400 Bad
/// Request response carrying the underlying message.
pub struct BadRequest<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for BadRequest<E> {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
