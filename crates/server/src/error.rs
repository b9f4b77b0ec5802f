use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::services::TodoError;
use log::error;
use models::validation::FieldErrors;
use sea_orm::DbErr;

/// Key used in the error map for problems with the body as a whole
const BODY_FIELD: &str = "$";

/// Handler failures and the responses they turn into
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a field to messages map
    Validation(FieldErrors),
    /// 404 with an empty body
    NotFound,
    /// 500 with an empty body
    Storage(DbErr),
    /// Rejections that keep axum's own status and body
    Rejected(JsonRejection),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                let mut errors = FieldErrors::new();
                errors.add(BODY_FIELD, rejection.body_text());
                Self::Validation(errors)
            }
            other => Self::Rejected(other),
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => Self::NotFound,
            TodoError::Database(err) => Self::Storage(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Storage(err) => {
                error!("Storage failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Self::Rejected(rejection) => rejection.into_response(),
        }
    }
}
