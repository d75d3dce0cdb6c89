use reqwest::{Client, StatusCode};
use std::future::Future;

use crate::config::ApiConfig;
use crate::profile::ProfileDraft;
use crate::submit::error::{extract_message, SubmitError};

/// Remote endpoint that stores profiles.
pub trait ProfileApi: Send + Sync + 'static {
    /// Sends one create request. `Ok` only for 201 Created.
    fn create_profile(
        &self,
        draft: &ProfileDraft,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// [`ProfileApi`] over HTTP: `POST {base_url}{create_path}` with a JSON body.
pub struct HttpProfileApi {
    client: Client,
    url: String,
}

impl HttpProfileApi {
    pub fn new(config: &ApiConfig) -> Result<Self, SubmitError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(SubmitError::ClientBuild)?;

        Ok(Self {
            client,
            url: config.create_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProfileApi for HttpProfileApi {
    async fn create_profile(&self, draft: &ProfileDraft) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .json(draft)
            .send()
            .await
            .map_err(|e| SubmitError::Transport {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        // Body is best effort: an unreadable body just means no server message.
        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}
