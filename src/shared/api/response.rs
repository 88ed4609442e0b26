// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::error::{ClassifiedError, ErrorKind};

/// Error envelope. Successful responses carry the payload itself.
#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiResponse {
    /// `200 OK` with `data` as the whole body.
    pub fn ok<T: Serialize>(data: &T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
            },
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    /// Maps a classified use-case error onto its response.
    ///
    /// `Unexpected` errors never expose their message; callers log them
    /// before handing them over.
    pub fn from_error<E: ClassifiedError>(err: &E) -> HttpResponse {
        match err.kind() {
            ErrorKind::NotFound => Self::not_found(err.code(), &err.to_string()),
            ErrorKind::ValidationFailure => Self::bad_request(err.code(), &err.to_string()),
            ErrorKind::Unexpected => Self::internal_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    #[derive(Debug, thiserror::Error)]
    enum SampleError {
        #[error("Thing not found")]
        Missing,
        #[error("Thing is invalid")]
        Invalid,
        #[error("Store exploded: {0}")]
        Broken(String),
    }

    impl ClassifiedError for SampleError {
        fn kind(&self) -> ErrorKind {
            match self {
                SampleError::Missing => ErrorKind::NotFound,
                SampleError::Invalid => ErrorKind::ValidationFailure,
                SampleError::Broken(_) => ErrorKind::Unexpected,
            }
        }

        fn code(&self) -> &'static str {
            match self {
                SampleError::Missing => "THING_NOT_FOUND",
                SampleError::Invalid => "THING_INVALID",
                SampleError::Broken(_) => "THING_BROKEN",
            }
        }
    }

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn ok_returns_payload_unwrapped() {
        let resp = ApiResponse::ok(&serde_json::json!({ "id": 1 }));
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "id": 1 }));
    }

    #[actix_web::test]
    async fn not_found_kind_maps_to_404_with_message() {
        let resp = ApiResponse::from_error(&SampleError::Missing);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "THING_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Thing not found");
    }

    #[actix_web::test]
    async fn validation_kind_maps_to_400() {
        let resp = ApiResponse::from_error(&SampleError::Invalid);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "THING_INVALID");
    }

    #[actix_web::test]
    async fn unexpected_kind_hides_internal_detail() {
        let resp = ApiResponse::from_error(&SampleError::Broken("password=hunter2".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "An unexpected error occurred");
        assert!(!body.to_string().contains("hunter2"));
    }
}
