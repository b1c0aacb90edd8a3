// Backend data API repository implementation
use crate::application::record_repository::{Record, RecordRepository, RetrievalError};
use crate::domain::query::QueryParameters;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct BackendRepository {
    base_url: String,
    client: reqwest::Client,
}

impl BackendRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn data_url(&self) -> String {
        format!("{}/api/data", self.base_url)
    }
}

#[async_trait]
impl RecordRepository for BackendRepository {
    async fn fetch_records(
        &self,
        params: &QueryParameters,
    ) -> Result<Vec<Record>, RetrievalError> {
        let response = self
            .client
            .get(self.data_url())
            .query(&params.as_query_pairs())
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Backend { status, body });
        }

        // The backend returns an already-parsed JSON array of records
        Ok(response.json::<Vec<Record>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_trims_trailing_slash() {
        let repository = BackendRepository::new("http://localhost:8080/".to_string());
        assert_eq!(repository.data_url(), "http://localhost:8080/api/data");
    }
}
