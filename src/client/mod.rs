//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{ApiToken, CampaignId, Envelope, SendCampaign, SendSms, SenderId, SmsId};

const DEFAULT_BASE_URL: &str = "https://cloudsms.gr";

const BALANCE_PATH: &[&str] = &["api", "v3", "balance"];
const SMS_SEND_PATH: &[&str] = &["api", "v3", "sms", "send"];
const CAMPAIGN_SEND_PATH: &[&str] = &["api", "v3", "campaign", "send"];
const SMS_PATH: &[&str] = &["api", "v3", "sms"];
const CAMPAIGN_PATH: &[&str] = &["api", "v3", "campaign"];

const JSON_MIME: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

// No `Debug`: headers carry the bearer token.
#[derive(Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    headers: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(request.url),
                HttpMethod::Post => self.client.post(request.url),
            };
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body.as_ref() {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors produced while talking to CloudSMS.
///
/// Operations never return this type directly: its `Display` text becomes the
/// `message` of an [`Envelope::Error`]. It is returned as-is by
/// [`CloudSmsClientBuilder::build`].
pub enum CloudSmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error(transparent)]
    Transport(Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}{}", body_suffix(.body))]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Request payload could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),

    /// The configured base URL cannot carry a path (e.g. `mailto:`).
    #[error("base URL cannot carry an API path: {0}")]
    UnsupportedBaseUrl(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" ({body})"),
        None => String::new(),
    }
}

/// Immutable settings of a [`CloudSmsClient`].
#[derive(Debug)]
pub struct ClientConfig {
    api_token: ApiToken,
    sender_id: SenderId,
    base_url: Url,
}

impl ClientConfig {
    /// Sender id used when a request does not override it.
    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    /// Gateway root, e.g. `https://cloudsms.gr/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[derive(Debug)]
/// Builder for [`CloudSmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct CloudSmsClientBuilder {
    api_token: ApiToken,
    sender_id: SenderId,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CloudSmsClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_token: impl Into<ApiToken>, sender_id: impl Into<SenderId>) -> Self {
        Self {
            api_token: api_token.into(),
            sender_id: sender_id.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway root (`https://cloudsms.gr` by default).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`CloudSmsClient`].
    ///
    /// Fails when the base URL does not parse or cannot carry a path.
    pub fn build(self) -> Result<CloudSmsClient, CloudSmsError> {
        let base_url = Url::parse(&self.base_url).map_err(CloudSmsError::InvalidBaseUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(CloudSmsError::UnsupportedBaseUrl(self.base_url));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| CloudSmsError::Transport(Box::new(err)))?;

        Ok(CloudSmsClient {
            config: Arc::new(ClientConfig {
                api_token: self.api_token,
                sender_id: self.sender_id,
                base_url,
            }),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level CloudSMS client.
///
/// Every request carries the bearer token and JSON `Content-Type`/`Accept`
/// headers. Operations never fail with `Err`: transport, HTTP and decoding
/// failures come back as [`Envelope::Error`].
///
/// Only [`CloudSmsClient::get_balance`] inspects the gateway's own `status`
/// field. The other operations return the decoded body untouched inside
/// [`Envelope::Success`], even when that body reports an application error.
pub struct CloudSmsClient {
    config: Arc<ClientConfig>,
    http: Arc<dyn HttpTransport>,
}

impl CloudSmsClient {
    /// Create a client against `https://cloudsms.gr`.
    ///
    /// For more customization, use [`CloudSmsClient::builder`].
    pub fn new(api_token: impl Into<ApiToken>, sender_id: impl Into<SenderId>) -> Self {
        Self {
            config: Arc::new(ClientConfig {
                api_token: api_token.into(),
                sender_id: sender_id.into(),
                base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"),
            }),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(
        api_token: impl Into<ApiToken>,
        sender_id: impl Into<SenderId>,
    ) -> CloudSmsClientBuilder {
        CloudSmsClientBuilder::new(api_token, sender_id)
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Remaining account balance, with the currency symbol removed (`"12.50"`).
    ///
    /// A body whose `status` is not `success` yields an error envelope carrying
    /// the gateway's `message`.
    pub async fn get_balance(&self) -> Envelope<String> {
        match self.try_get_balance().await {
            Ok(envelope) => envelope,
            Err(err) => degrade("get_balance", err),
        }
    }

    /// Send one SMS to a single number or a batch of numbers.
    pub async fn send_sms(&self, request: SendSms) -> Envelope<serde_json::Value> {
        let result = match crate::transport::encode_send_sms_json(&request, self.sender_id()) {
            Ok(body) => self.fetch_raw(HttpMethod::Post, SMS_SEND_PATH, Some(body)).await,
            Err(err) => Err(CloudSmsError::Encode(err)),
        };
        settle("send_sms", result)
    }

    /// Send a campaign message to every contact in the given lists.
    pub async fn send_campaign(&self, request: SendCampaign) -> Envelope<serde_json::Value> {
        let encoded = crate::transport::encode_send_campaign_json(&request, self.sender_id());
        let result = match encoded {
            Ok(body) => {
                self.fetch_raw(HttpMethod::Post, CAMPAIGN_SEND_PATH, Some(body))
                    .await
            }
            Err(err) => Err(CloudSmsError::Encode(err)),
        };
        settle("send_campaign", result)
    }

    /// Details and delivery status of a sent SMS.
    pub async fn get_sms(&self, sms_id: impl Into<SmsId>) -> Envelope<serde_json::Value> {
        let sms_id = sms_id.into();
        let mut path = SMS_PATH.to_vec();
        path.push(sms_id.as_str());
        settle("get_sms", self.fetch_raw(HttpMethod::Get, &path, None).await)
    }

    /// Details and progress of a campaign.
    pub async fn get_campaign(
        &self,
        campaign_id: impl Into<CampaignId>,
    ) -> Envelope<serde_json::Value> {
        let campaign_id = campaign_id.into();
        let mut path = CAMPAIGN_PATH.to_vec();
        path.push(campaign_id.as_str());
        settle(
            "get_campaign",
            self.fetch_raw(HttpMethod::Get, &path, None).await,
        )
    }

    fn sender_id(&self) -> &SenderId {
        &self.config.sender_id
    }

    async fn try_get_balance(&self) -> Result<Envelope<String>, CloudSmsError> {
        let body = self.fetch(HttpMethod::Get, BALANCE_PATH, None).await?;
        crate::transport::decode_balance_json_response(&body)
            .map_err(|err| CloudSmsError::Parse(Box::new(err)))
    }

    async fn fetch_raw(
        &self,
        method: HttpMethod,
        path: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, CloudSmsError> {
        let body = self.fetch(method, path, body).await?;
        Ok(crate::transport::decode_raw_json_response(&body))
    }

    async fn fetch(
        &self,
        method: HttpMethod,
        path: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<String, CloudSmsError> {
        let url = self.endpoint(path)?;
        tracing::debug!(method = method.as_str(), %url, "sending CloudSMS request");

        let request = HttpRequest {
            method,
            url,
            headers: self.default_headers(),
            body,
        };
        let response = self
            .http
            .execute(request)
            .await
            .map_err(CloudSmsError::Transport)?;
        tracing::debug!(status = response.status, "received CloudSMS response");

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(CloudSmsError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }

    fn endpoint(&self, path: &[&str]) -> Result<Url, CloudSmsError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CloudSmsError::UnsupportedBaseUrl(self.config.base_url.to_string()))?
            .clear()
            .extend(path);
        Ok(url)
    }

    fn default_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", self.config.api_token.bearer_header()),
            ("Content-Type", JSON_MIME.to_owned()),
            ("Accept", JSON_MIME.to_owned()),
        ]
    }
}

fn settle<T>(operation: &'static str, result: Result<T, CloudSmsError>) -> Envelope<T> {
    match result {
        Ok(data) => Envelope::success(data),
        Err(err) => degrade(operation, err),
    }
}

fn degrade<T>(operation: &'static str, err: CloudSmsError) -> Envelope<T> {
    let message = failure_text(&err);
    tracing::warn!(operation, error = %message, "CloudSMS request failed");
    Envelope::error(message)
}

/// `Display` of `err` followed by every cause in its source chain not already
/// spelled out by an outer error.
fn failure_text(err: &CloudSmsError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
