use crate::errors::{errors::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl AppErrorHttp {
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),

            ServiceError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation failed: {}", errors.join(", ")),
            ),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                RepositoryError::AlreadyExists(msg) => (StatusCode::CONFLICT, msg.clone()),
                RepositoryError::ForeignKey(msg) => (
                    StatusCode::BAD_REQUEST,
                    format!("Foreign key violation: {msg}"),
                ),
                RepositoryError::Sqlx(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            },

            ServiceError::RetryExhausted(attempts) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Could not allocate a unique card number after {attempts} attempts"),
            ),
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();

        if status.is_server_error() {
            error!("🚨 {}", self.0);
        } else {
            warn!("⚠️ {}", self.0);
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDatabaseError;

    #[test]
    fn not_found_keeps_its_message() {
        let err = AppErrorHttp(ServiceError::NotFound("Card not found!".into()));

        let (status, msg) = err.status_and_message();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Card not found!");
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = AppErrorHttp(ServiceError::Repo(RepositoryError::AlreadyExists(
            "cards_card_number_key".into(),
        )));

        assert_eq!(err.status_and_message().0, StatusCode::CONFLICT);
    }

    #[test]
    fn unknown_account_is_a_client_error() {
        let err = AppErrorHttp(ServiceError::Repo(RepositoryError::from(
            FakeDatabaseError::sqlx("23503", Some("cards_account_id_fkey")),
        )));

        let (status, msg) = err.status_and_message();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Foreign key violation: cards_account_id_fkey");
    }

    #[test]
    fn exhausted_retries_are_server_errors() {
        let err = AppErrorHttp(ServiceError::RetryExhausted(10));

        assert_eq!(
            err.status_and_message().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
