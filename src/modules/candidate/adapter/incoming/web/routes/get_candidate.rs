use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::candidate::application::ports::outgoing::CandidateRecord;
use crate::shared::api::{parse_positive_id, ApiResponse};
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::AppState;

/// Get a candidate by id
#[utoipa::path(
    get,
    path = "/candidates/{id}",
    tag = "candidates",
    params(("id" = String, Path, description = "Candidate id (positive integer)")),
    responses(
        (status = 200, description = "Candidate found", body = CandidateRecord),
        (status = 400, description = "Invalid candidate id", body = ErrorResponse),
        (status = 404, description = "Candidate not found", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    )
)]
#[get("/candidates/{id}")]
pub async fn get_candidate_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();

    let Some(candidate_id) = parse_positive_id(&raw_id) else {
        warn!(raw_id = %raw_id, "Rejected candidate id");
        return ApiResponse::bad_request(
            "INVALID_CANDIDATE_ID",
            "Invalid candidate ID. Must be a positive integer.",
        );
    };

    match data.candidate.get_single.execute(candidate_id).await {
        Ok(candidate) => ApiResponse::ok(&candidate),
        Err(err) => {
            if err.kind() == ErrorKind::Unexpected {
                error!(candidate_id, error = %err, "Failed to fetch candidate");
            }
            ApiResponse::from_error(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::candidate::application::ports::incoming::use_cases::{
        GetCandidateError, GetCandidateUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockGetCandidateUseCase {
        result: Result<CandidateRecord, GetCandidateError>,
    }

    #[async_trait]
    impl GetCandidateUseCase for MockGetCandidateUseCase {
        async fn execute(&self, _candidate_id: i32) -> Result<CandidateRecord, GetCandidateError> {
            self.result.clone()
        }
    }

    fn jane() -> CandidateRecord {
        CandidateRecord {
            id: 2,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: None,
            address: Some("12 Main St".to_string()),
        }
    }

    async fn call(
        result: Result<CandidateRecord, GetCandidateError>,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_get_candidate(MockGetCandidateUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_candidate_handler),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn test_get_candidate_success() {
        let resp = call(Ok(jane()), "/candidates/2").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let data: Value = test::read_body_json(resp).await;
        assert_eq!(data["id"], 2);
        assert_eq!(data["firstName"], "Jane");
        assert_eq!(data["lastName"], "Smith");
        assert_eq!(data["address"], "12 Main St");
        assert!(data.get("phone").is_none());
    }

    #[actix_web::test]
    async fn test_get_candidate_not_found() {
        let resp = call(Err(GetCandidateError::CandidateNotFound), "/candidates/5").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CANDIDATE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_candidate_invalid_id() {
        let resp = call(Ok(jane()), "/candidates/two").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CANDIDATE_ID");
    }

    #[actix_web::test]
    async fn test_get_candidate_query_failed() {
        let resp = call(
            Err(GetCandidateError::QueryFailed("timeout".to_string())),
            "/candidates/2",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
