//! Registration response mapping.
//!
//! Every outcome maps to a fixed status code and message. The body never says
//! which credential check failed or why the server failed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use register_service_lib::RegistrationOutcome;

pub const MSG_INVALID_BODY: &str = "error to parse the request body";
pub const MSG_INVALID_CREDENTIALS: &str = "invalid cpf or password";
pub const MSG_INTERNAL_ERROR: &str = "internal server error";
pub const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const MSG_SUCCESS: &str = "success";

/// JSON body returned for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// HTTP response: status line plus [`RegisterResponse`] body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: StatusCode,
    body: RegisterResponse,
}

impl ApiResponse {
    fn new(status: StatusCode, message: &str, access_token: Option<String>) -> Self {
        Self {
            status,
            body: RegisterResponse {
                status: status.as_u16(),
                message: message.to_string(),
                access_token,
            },
        }
    }

    pub fn invalid_request_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, MSG_INVALID_BODY, None)
    }

    pub fn invalid_cpf_or_password() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, MSG_INVALID_CREDENTIALS, None)
    }

    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR, None)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED, None)
    }

    pub fn success(token: String) -> Self {
        Self::new(StatusCode::OK, MSG_SUCCESS, Some(token))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &RegisterResponse {
        &self.body
    }
}

impl From<RegistrationOutcome> for ApiResponse {
    fn from(outcome: RegistrationOutcome) -> Self {
        match outcome {
            RegistrationOutcome::Success { token } => Self::success(token),
            RegistrationOutcome::MalformedInput => Self::invalid_request_body(),
            RegistrationOutcome::InvalidCredentials => Self::invalid_cpf_or_password(),
            RegistrationOutcome::StorageFailure => Self::internal_server_error(),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
