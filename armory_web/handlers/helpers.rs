use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use armory_types::errors::{AppError, ApplicationError, DbError, FieldError};

/// Machine-readable error body returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

/// Wraps `ApplicationError` so handlers can `?` their way out while the
/// error still maps onto a proper status code and error key.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(ApplicationError::App(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, field_errors) = match &self.0 {
            ApplicationError::App(AppError::IdPresentOnCreate) => {
                (StatusCode::BAD_REQUEST, "idexists", None)
            }
            ApplicationError::App(AppError::MissingId) => {
                (StatusCode::BAD_REQUEST, "idnull", None)
            }
            ApplicationError::App(AppError::IdMismatch { .. }) => {
                (StatusCode::BAD_REQUEST, "idinvalid", None)
            }
            ApplicationError::App(AppError::NotFound(_)) => {
                (StatusCode::BAD_REQUEST, "idnotfound", None)
            }
            ApplicationError::App(AppError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, "validation", Some(errors.clone()))
            }
            ApplicationError::App(AppError::InvalidSortProperty(_)) => {
                (StatusCode::BAD_REQUEST, "sortinvalid", None)
            }
            ApplicationError::Db(DbError::HeroNotFound(_)) => {
                (StatusCode::NOT_FOUND, "notfound", None)
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal", None),
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self.0);
            "Internal server error.".to_string()
        } else {
            self.0.to_string()
        };

        (
            status,
            Json(ErrorBody {
                error,
                message,
                field_errors,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApplicationError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn app_errors_map_to_bad_request() {
        assert_eq!(
            status_of(AppError::IdPresentOnCreate.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AppError::MissingId.into()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(
                AppError::IdMismatch {
                    path_id: 1,
                    body_id: 2
                }
                .into()
            ),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::NotFound(1).into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn read_path_miss_maps_to_not_found() {
        assert_eq!(
            status_of(DbError::HeroNotFound(1).into()),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn unexpected_errors_map_to_internal() {
        assert_eq!(
            status_of(ApplicationError::Unknown("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
