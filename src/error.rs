use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Any possible server errors
#[derive(Debug, Error)]
pub(crate) enum ServerError {
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    DbError(#[from] DbErr),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::JsonRejection(rejection) => {
                let message = format!("Bad request: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, Json(message))
            }
            ServerError::NotFound(message) => (StatusCode::NOT_FOUND, Json(message.to_owned())),
            ServerError::DbError(e) => {
                tracing::error!("Database error occurred: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(INTERNAL_SERVER_ERROR_MESSAGE.to_owned()),
                )
            }
        }
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_a_404_with_the_message() {
        let res = ServerError::NotFound("User not found").into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn db_errors_are_internal() {
        let err = ServerError::from(DbErr::Custom("boom".into()));
        assert!(matches!(err, ServerError::DbError(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
