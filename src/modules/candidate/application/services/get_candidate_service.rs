use async_trait::async_trait;

use crate::modules::candidate::application::ports::incoming::use_cases::{
    GetCandidateError, GetCandidateUseCase,
};
use crate::modules::candidate::application::ports::outgoing::{CandidateQuery, CandidateRecord};

pub struct GetCandidateService<Q>
where
    Q: CandidateQuery,
{
    query: Q,
}

impl<Q> GetCandidateService<Q>
where
    Q: CandidateQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCandidateUseCase for GetCandidateService<Q>
where
    Q: CandidateQuery + Send + Sync,
{
    async fn execute(&self, candidate_id: i32) -> Result<CandidateRecord, GetCandidateError> {
        self.query
            .get_by_id(candidate_id)
            .await
            .map_err(|e| GetCandidateError::QueryFailed(e.to_string()))?
            .ok_or(GetCandidateError::CandidateNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::candidate::application::domain::entities::CandidateApplications;
    use crate::modules::candidate::application::ports::outgoing::CandidateQueryError;

    struct MockCandidateQuery {
        result: Result<Option<CandidateRecord>, CandidateQueryError>,
    }

    #[async_trait]
    impl CandidateQuery for MockCandidateQuery {
        async fn get_by_id(
            &self,
            _candidate_id: i32,
        ) -> Result<Option<CandidateRecord>, CandidateQueryError> {
            self.result.clone()
        }

        async fn find_with_applications(
            &self,
            _candidate_id: i32,
        ) -> Result<Option<CandidateApplications>, CandidateQueryError> {
            unimplemented!("not used by GetCandidateService")
        }
    }

    fn jane() -> CandidateRecord {
        CandidateRecord {
            id: 2,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            address: None,
        }
    }

    #[tokio::test]
    async fn returns_existing_candidate() {
        let service = GetCandidateService::new(MockCandidateQuery {
            result: Ok(Some(jane())),
        });

        let candidate = service.execute(2).await.unwrap();

        assert_eq!(candidate, jane());
    }

    #[tokio::test]
    async fn missing_candidate_is_not_found() {
        let service = GetCandidateService::new(MockCandidateQuery { result: Ok(None) });

        let result = service.execute(404).await;

        assert!(matches!(result, Err(GetCandidateError::CandidateNotFound)));
    }

    #[tokio::test]
    async fn store_failure_is_query_failed() {
        let service = GetCandidateService::new(MockCandidateQuery {
            result: Err(CandidateQueryError::DatabaseError("connection reset".to_string())),
        });

        let result = service.execute(2).await;

        assert!(matches!(
            result,
            Err(GetCandidateError::QueryFailed(msg)) if msg.contains("connection reset")
        ));
    }
}
