use crate::constant::CREATE_BLOG_PATH;
use crate::error::BizErrorEnum;
use crate::request::CreateBlogData;
use crate::session_state::UserSession;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use std::time::Duration;

/// HTTP client for the blog backend.
#[derive(Debug)]
pub struct BlogClient {
    http_client: Client,
    base_url: String,
}

impl BlogClient {
    /// Builds a client that keeps cookies between requests, the backend
    /// relies on them next to the bearer token.
    ///
    /// Requests never time out unless `timeout` is given.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, BizErrorEnum> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            tracing::error!("Failed to build http client: {:?}", e);
            BizErrorEnum::BuildHttpClientError(e)
        })?;
        Ok(BlogClient {
            http_client,
            base_url,
        })
    }

    /// Appends `path` to the base url, keeping any path prefix the base already has.
    fn endpoint(&self, path: &str) -> Result<Url, BizErrorEnum> {
        let mut base = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Failed to parse url: url={}, e={:?}", &self.base_url, e);
            BizErrorEnum::ParseUrlError
        })?;
        if !base.path().ends_with('/') {
            let prefix = format!("{}/", base.path());
            base.set_path(&prefix);
        }
        base.join(path.trim_start_matches('/')).map_err(|e| {
            tracing::error!("Url failed to join {}: {:?}", path, e);
            BizErrorEnum::JoinUrlError
        })
    }

    /// `POST /blog/create-blog`. The response body is returned as opaque JSON.
    ///
    /// The status code is not inspected: a non-2xx response only fails
    /// when its body is not JSON.
    #[tracing::instrument(name = "Create a blog", skip_all, fields(draft = body.draft))]
    pub async fn create_blog(
        &self,
        session: &UserSession,
        body: &CreateBlogData<'_>,
    ) -> Result<serde_json::Value, BizErrorEnum> {
        let url = self.endpoint(CREATE_BLOG_PATH)?;

        let response = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, session.bearer())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send create-blog request: {:?}", e);
                BizErrorEnum::NetworkFailed(e)
            })?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Backend answered create-blog with status {}", status);
        }

        let data = response.json::<serde_json::Value>().await.map_err(|e| {
            tracing::error!("Failed to parse create-blog response: {:?}", e);
            BizErrorEnum::NetworkFailed(e)
        })?;
        tracing::info!("create-blog response: {}", data);
        Ok(data)
    }
}
