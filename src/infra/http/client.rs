use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::usecase::ports::remote::FetchError;

/// Thin JSON client for the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;

        let mut headers = HeaderMap::new();
        if let Some(token) = config.token.as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|err| FetchError::InvalidHeader(format!("authorization token: {err}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("storefront-admin/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        Ok(ApiClient { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` below the base url; leading slashes are ignored.
    pub fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| FetchError::InvalidUrl(err.to_string()))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, FetchError> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "backend request");
        Ok(self.http.request(method, url))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, FetchError> {
        let response = builder
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "backend returned an error status");
        Err(FetchError::Status {
            status: status.as_u16(),
            body,
        })
    }

    pub async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path)?.query(query);
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }

    /// Sends a JSON body; an empty response body yields `None`.
    pub async fn send_json<T>(
        &self,
        method: Method,
        path: &str,
        body: &Value,
    ) -> Result<Option<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(method, path)?.json(body);
        let response = self.send(builder).await?;
        decode_optional(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), FetchError> {
        let builder = self.request(Method::DELETE, path)?;
        self.send(builder).await.map(|_| ())
    }
}

async fn decode_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>, FetchError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|err| FetchError::Decode(err.to_string()))
}
