//! API error mapping and token-bearing success responses

use gavel_domain::error::Error;
use rocket::http::{Header, Status};
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, Response, response};
use serde::Serialize;
use tracing::error;

/// JSON error body shared by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable error type
    pub error: &'static str,
    /// Human-readable detail
    pub message: String,
}

/// An API failure with its HTTP status
#[derive(Debug)]
pub struct ApiError {
    status: Status,
    body: ErrorBody,
}

impl ApiError {
    /// 401 with the uniform invalid-token message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: Status::Unauthorized,
            body: ErrorBody {
                error: "unauthorized",
                message: message.into(),
            },
        }
    }

    /// 400 for malformed request bodies
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: Status::BadRequest,
            body: ErrorBody {
                error: "bad_request",
                message: message.into(),
            },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        // Body carries the variant's bare message, not the Display string:
        // credential failures must read exactly "Invalid Token" on the wire.
        let (status, error, message) = match err {
            Error::Unauthorized { message } => (Status::Unauthorized, "unauthorized", message),
            Error::Forbidden { message } => (Status::Forbidden, "forbidden", message),
            Error::NotFound { resource } => (Status::NotFound, "not_found", resource),
            other => {
                // Infrastructure detail stays out of the response body.
                error!(%other, "internal error surfaced to API boundary");
                (
                    Status::InternalServerError,
                    "internal",
                    "internal server error".to_string(),
                )
            }
        };
        Self {
            status,
            body: ErrorBody { error, message },
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}

/// Successful issuance: JSON user summary plus the access token in the
/// `authorization` response header
///
/// The refresh token never appears here; the handler sets it as an
/// http-only cookie scoped to the reissue path.
#[derive(Serialize)]
pub struct SessionBody {
    /// Authenticated user id
    pub id: i64,
    /// Authenticated username
    pub username: String,
}

pub struct TokenIssued {
    access_token: String,
    body: SessionBody,
}

impl TokenIssued {
    pub fn new(access_token: String, id: i64, username: String) -> Self {
        Self {
            access_token,
            body: SessionBody { id, username },
        }
    }
}

impl<'r> Responder<'r, 'static> for TokenIssued {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(Json(self.body).respond_to(request)?)
            .header(Header::new("authorization", self.access_token))
            .ok()
    }
}
