//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    API_PREFIX, ApiResponse, BalanceResponse, Credentials, DeliveryReportResponse, MessageId,
    Method, Operation, SendSms, SendSmsResponse, Status, StatusCode, TimestampError,
};
use crate::transport::{self, TransportError};

/// Production BongaSMS host.
pub const DEFAULT_HOST: &str = "https://app.bongasms.co.ke";

/// Timeout applied to every request unless overridden on the builder.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    status_text: String,
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
    timeout: Duration,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => self.client.get(&request.url),
                // `form` also sets `Content-Type: application/x-www-form-urlencoded`.
                Method::Post => self.client.post(&request.url).form(&request.form),
            };
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }

            // Errors drop the URL: the query carries the API key.
            let response = builder
                .timeout(self.timeout)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            let status = response.status();
            if status != reqwest::StatusCode::OK {
                return Ok(HttpResponse {
                    status: status.as_u16(),
                    status_text: status.to_string(),
                    body: String::new(),
                });
            }

            let body = response
                .text()
                .await
                .map_err(reqwest::Error::without_url)?;
            Ok(HttpResponse {
                status: status.as_u16(),
                status_text: status.to_string(),
                body,
            })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which BongaSMS status codes are turned into [`BongaError::Api`].
///
/// BongaSMS documents `222` (success) and `666` (failure) only.
pub enum StatusPolicy {
    /// Reject `666` only; undocumented codes are returned as results.
    #[default]
    Lenient,
    /// Reject every code other than `222`.
    Strict,
}

impl StatusPolicy {
    fn rejects(self, code: StatusCode) -> bool {
        match self {
            Self::Lenient => code.is_failure(),
            Self::Strict => !code.is_success(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`BongaClient`].
///
/// No partial result is ever returned alongside an error.
pub enum BongaError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with an HTTP status other than `200`. The body is not parsed.
    #[error("{status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// Response body is not JSON or does not have the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// `date_received` of a delivery report could not be read as Africa/Nairobi time.
    #[error("timestamp error: {0}")]
    Timestamp(#[source] TimestampError),

    /// BongaSMS reported a failure status; the message is the upstream `status_message`.
    #[error("{message}")]
    Api {
        status_code: StatusCode,
        message: String,
    },

    /// The host passed to [`BongaClientBuilder::host`] is not an absolute HTTP(S) URL.
    #[error("invalid host {host:?}: {reason}")]
    InvalidHost { host: String, reason: String },
}

impl BongaError {
    fn from_transport(err: TransportError) -> Self {
        match err {
            TransportError::Json(err) => Self::Decode(err),
            TransportError::Timestamp(err) => Self::Timestamp(err),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`BongaClient`].
///
/// Use this when you need to customize the host, timeout, user-agent or
/// status policy.
pub struct BongaClientBuilder {
    credentials: Credentials,
    host: String,
    timeout: Duration,
    user_agent: Option<String>,
    status_policy: StatusPolicy,
}

impl BongaClientBuilder {
    /// Create a builder with the production host and a 10 second timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            host: DEFAULT_HOST.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            status_policy: StatusPolicy::default(),
        }
    }

    /// Override the host, e.g. to point at a mock server. `/api` is appended per request.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    /// Build a [`BongaClient`].
    pub fn build(self) -> Result<BongaClient, BongaError> {
        let host = normalize_host(&self.host)?;

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| BongaError::Transport(Box::new(err)))?;

        Ok(BongaClient {
            credentials: self.credentials,
            host,
            timeout: self.timeout,
            status_policy: self.status_policy,
            http: Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        })
    }
}

fn normalize_host(host: &str) -> Result<String, BongaError> {
    let invalid = |reason: String| BongaError::InvalidHost {
        host: host.to_owned(),
        reason,
    };

    let parsed = url::Url::parse(host).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme `{}`, expected http or https",
            parsed.scheme()
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("host must not carry a query or fragment".to_owned()));
    }

    Ok(host.trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// High-level BongaSMS client.
///
/// Holds the credentials and target host; every call issues exactly one HTTP
/// request with no retries. The client keeps no mutable state, so one
/// instance (or its clones) can serve concurrent callers.
pub struct BongaClient {
    credentials: Credentials,
    host: String,
    timeout: Duration,
    status_policy: StatusPolicy,
    http: Arc<dyn HttpTransport>,
}

impl BongaClient {
    /// Create a client for the production host.
    ///
    /// For more customization, use [`BongaClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            host: DEFAULT_HOST.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            status_policy: StatusPolicy::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> BongaClientBuilder {
        BongaClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send an SMS through BongaSMS.
    ///
    /// The service id on `request` is not transmitted; `send-sms-v1` does not accept it.
    ///
    /// Errors:
    /// - [`BongaError::Transport`] when the request could not be completed,
    /// - [`BongaError::HttpStatus`] for any HTTP status other than `200`,
    /// - [`BongaError::Decode`] for malformed bodies,
    /// - [`BongaError::Api`] when BongaSMS reports a failure status.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, BongaError> {
        if let Some(service_id) = request.service_id() {
            debug!(
                service_id = service_id.as_str(),
                "service id is not sent to send-sms-v1"
            );
        }

        let form = transport::encode_send_sms_form(&self.credentials, &request);
        self.execute(
            Operation::SendSms,
            Vec::new(),
            form,
            transport::decode_send_sms_json_response,
        )
        .await
    }

    /// Fetch the credit balance of the authenticated client.
    ///
    /// Errors are the same as for [`BongaClient::send_sms`].
    pub async fn check_balance(&self) -> Result<BalanceResponse, BongaError> {
        let query = transport::encode_check_balance_query(&self.credentials);
        self.execute(
            Operation::CheckBalance,
            query,
            Vec::new(),
            transport::decode_balance_json_response,
        )
        .await
    }

    /// Fetch the delivery report of a message returned by [`BongaClient::send_sms`].
    ///
    /// Errors are the same as for [`BongaClient::send_sms`], plus
    /// [`BongaError::Timestamp`] when `date_received` is not a valid
    /// `YYYY-MM-DD HH:MM:SS` Africa/Nairobi wall time.
    pub async fn fetch_delivery_report(
        &self,
        message_id: MessageId,
    ) -> Result<DeliveryReportResponse, BongaError> {
        let query = transport::encode_fetch_delivery_query(&self.credentials, message_id);
        self.execute(
            Operation::FetchDeliveryReport,
            query,
            Vec::new(),
            transport::decode_delivery_report_json_response,
        )
        .await
    }

    async fn execute<T: ApiResponse>(
        &self,
        operation: Operation,
        query: Vec<(String, String)>,
        form: Vec<(String, String)>,
        decode: fn(&str) -> Result<T, TransportError>,
    ) -> Result<T, BongaError> {
        let request = HttpRequest {
            method: operation.method(),
            url: self.endpoint(operation),
            query,
            form,
        };
        debug!(
            operation = operation.name(),
            method = operation.method().as_str(),
            path = operation.path(),
            "sending BongaSMS request"
        );

        let response = self
            .http
            .execute(request)
            .await
            .map_err(BongaError::Transport)?;

        if response.status != 200 {
            warn!(
                operation = operation.name(),
                status = response.status,
                "unexpected HTTP status"
            );
            return Err(BongaError::HttpStatus {
                status: response.status,
                status_text: response.status_text,
            });
        }

        let status =
            transport::decode_status_envelope(&response.body).map_err(BongaError::from_transport)?;
        self.check_status(operation, status)?;

        let parsed = decode(&response.body).map_err(BongaError::from_transport)?;
        debug!(
            operation = operation.name(),
            status_code = parsed.status().code.as_i32(),
            status_message = parsed.status().message.as_str(),
            "BongaSMS request succeeded"
        );
        Ok(parsed)
    }

    fn check_status(&self, operation: Operation, status: Status) -> Result<(), BongaError> {
        if !self.status_policy.rejects(status.code) {
            return Ok(());
        }

        warn!(
            operation = operation.name(),
            status_code = status.code.as_i32(),
            status_message = status.message.as_str(),
            "BongaSMS rejected request"
        );
        Err(BongaError::Api {
            status_code: status.code,
            message: status.message,
        })
    }

    fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}{}", self.host, API_PREFIX, operation.path())
    }
}
