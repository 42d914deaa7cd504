use serde::{Serialize, de::DeserializeOwned};

use crate::{Client, ClientError, ClientResult};

/// Making requests to the store.
impl Client {
    /// Select rows from a collection. `parameters` are the store's filter
    /// operators, e.g. `("artist_id", "eq.yuno-sweez")` or
    /// `("order", "created_at.asc")`.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        collection: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<Vec<T>> {
        let response = self
            .client
            .get(format!("{}/rest/v1/{collection}", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(parameters)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::StoreError {
                status: status.as_u16(),
                message: Self::error_message(&bytes),
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Insert a single row into a collection.
    pub(crate) async fn insert<T: Serialize>(&self, collection: &str, row: &T) -> ClientResult<()> {
        let response = self
            .client
            .post(format!("{}/rest/v1/{collection}", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(row)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(ClientError::StoreError {
                status: status.as_u16(),
                message: Self::error_message(&bytes),
            });
        }
        Ok(())
    }

    pub(crate) fn error_message(bytes: &[u8]) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }
        serde_json::from_slice::<ErrorBody>(bytes)
            .ok()
            .and_then(|body| body.message)
    }
}
