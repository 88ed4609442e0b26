use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::position::application::ports::incoming::use_cases::{
    GetPositionCandidatesError, PositionCandidatesView,
};
use crate::shared::api::{parse_positive_id, ApiResponse};
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::AppState;

/// List the candidates of a position
///
/// Returns every application against the position with the candidate's
/// current interview step, average interview score and interview count,
/// earliest pipeline stage first.
#[utoipa::path(
    get,
    path = "/positions/{id}/candidates",
    tag = "positions",
    params(("id" = String, Path, description = "Position id (positive integer)")),
    responses(
        (status = 200, description = "Position candidates", body = PositionCandidatesView),
        (status = 400, description = "Invalid position id", body = ErrorResponse),
        (status = 404, description = "Position not found", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    )
)]
#[get("/positions/{id}/candidates")]
pub async fn get_position_candidates_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();

    let Some(position_id) = parse_positive_id(&raw_id) else {
        warn!(raw_id = %raw_id, "Rejected position id");
        return ApiResponse::bad_request(
            "INVALID_POSITION_ID",
            "Invalid position ID. Must be a positive integer.",
        );
    };

    match data.position.get_candidates.execute(position_id).await {
        Ok(view) => ApiResponse::ok(&view),
        Err(err) => map_error(position_id, err),
    }
}

fn map_error(position_id: i32, err: GetPositionCandidatesError) -> HttpResponse {
    if err.kind() == ErrorKind::Unexpected {
        error!(position_id, error = %err, "Failed to load position candidates");
    }
    ApiResponse::from_error(&err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    use crate::modules::position::application::domain::entities::InterviewStepSnapshot;
    use crate::modules::position::application::ports::incoming::use_cases::{
        CandidateWithStage, GetPositionCandidatesUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock GetPositionCandidatesUseCase
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockGetPositionCandidatesUseCase {
        result: Result<PositionCandidatesView, GetPositionCandidatesError>,
        seen_ids: Arc<Mutex<Vec<i32>>>,
    }

    impl MockGetPositionCandidatesUseCase {
        fn success(view: PositionCandidatesView) -> Self {
            Self {
                result: Ok(view),
                seen_ids: Arc::default(),
            }
        }

        fn error(err: GetPositionCandidatesError) -> Self {
            Self {
                result: Err(err),
                seen_ids: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl GetPositionCandidatesUseCase for MockGetPositionCandidatesUseCase {
        async fn execute(
            &self,
            position_id: i32,
        ) -> Result<PositionCandidatesView, GetPositionCandidatesError> {
            self.seen_ids.lock().unwrap().push(position_id);
            self.result.clone()
        }
    }

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    fn sample_view() -> PositionCandidatesView {
        PositionCandidatesView {
            position_id: 1,
            position_title: "Software Engineer".to_string(),
            candidates: vec![CandidateWithStage {
                candidate_id: 1,
                full_name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                current_interview_step: InterviewStepSnapshot {
                    id: 1,
                    name: "Initial Screening".to_string(),
                    order_index: 1,
                },
                average_score: 4.5,
                total_interviews: 2,
                application_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            }],
        }
    }

    async fn call(
        uc: MockGetPositionCandidatesUseCase,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_get_position_candidates(uc)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_position_candidates_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        test::call_service(&app, req).await
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_get_position_candidates_success() {
        let uc = MockGetPositionCandidatesUseCase::success(sample_view());
        let seen = Arc::clone(&uc.seen_ids);

        let resp = call(uc, "/positions/1/candidates").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["positionId"], 1);
        assert_eq!(body["positionTitle"], "Software Engineer");
        assert!(body.get("success").is_none());
        assert!(body.get("data").is_none());

        let candidate = &body["candidates"][0];
        assert_eq!(candidate["candidateId"], 1);
        assert_eq!(candidate["fullName"], "John Doe");
        assert_eq!(candidate["email"], "john.doe@example.com");
        assert_eq!(candidate["currentInterviewStep"]["name"], "Initial Screening");
        assert_eq!(candidate["currentInterviewStep"]["orderIndex"], 1);
        assert_eq!(candidate["averageScore"], 4.5);
        assert_eq!(candidate["totalInterviews"], 2);
        assert!(candidate["applicationDate"]
            .as_str()
            .unwrap()
            .starts_with("2024-01-15"));

        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[actix_web::test]
    async fn test_get_position_candidates_empty_list() {
        let view = PositionCandidatesView {
            candidates: vec![],
            ..sample_view()
        };

        let resp = call(
            MockGetPositionCandidatesUseCase::success(view),
            "/positions/1/candidates",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["candidates"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_get_position_candidates_not_found() {
        let resp = call(
            MockGetPositionCandidatesUseCase::error(GetPositionCandidatesError::PositionNotFound),
            "/positions/99/candidates",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "POSITION_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Position not found");
    }

    #[actix_web::test]
    async fn test_get_position_candidates_query_failed_is_internal_error() {
        let resp = call(
            MockGetPositionCandidatesUseCase::error(
                GetPositionCandidatesError::PositionQueryFailed("db down".to_string()),
            ),
            "/positions/1/candidates",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("db down"));
    }

    #[actix_web::test]
    async fn test_get_position_candidates_rejects_bad_ids() {
        for uri in [
            "/positions/abc/candidates",
            "/positions/0/candidates",
            "/positions/-5/candidates",
            "/positions/1.5/candidates",
        ] {
            let uc = MockGetPositionCandidatesUseCase::success(sample_view());
            let seen = Arc::clone(&uc.seen_ids);

            let resp = call(uc, uri).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "INVALID_POSITION_ID");
            assert!(seen.lock().unwrap().is_empty(), "use case called for {uri}");
        }
    }
}
