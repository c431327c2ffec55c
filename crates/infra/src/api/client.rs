//! Request dispatcher for the platform REST API
//!
//! Every call is scoped to an entity id (table or app). The dispatcher
//! obtains the authorization value for that entity, attaches the realm
//! header and maps failure responses into [`RequestError`]s.
//!
//! [`RequestError`]: qbgeo_domain::RequestError

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use qbgeo_core::MessageOwner;
use qbgeo_domain::constants::{JSON_CONTENT_TYPE, REALM_HOSTNAME_HEADER};
use qbgeo_domain::{ConnectorConfig, ConnectorError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use url::Url;

use super::auth::AccessTokenProvider;
use super::errors::request_error;
use super::query::{append_query, Query};
use crate::auth::TokenBroker;
use crate::errors::InfraError;
use crate::http::HttpClient;

const USER_AGENT: &str = concat!("qbgeo/", env!("CARGO_PKG_VERSION"));

/// Expected shape of a successful response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseKind {
    #[default]
    Json,
    Binary,
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Binary(Vec<u8>),
}

impl ResponseBody {
    /// JSON payload, or a decode error when binary content was requested.
    pub fn into_json(self) -> Result<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Binary(_) => Err(ConnectorError::Decode("expected a JSON response".into())),
        }
    }

    /// Raw payload; JSON bodies are re-serialized.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Json(value) => {
                serde_json::to_vec(&value).map_err(|err| InfraError::from(err).into())
            }
            Self::Binary(bytes) => Ok(bytes),
        }
    }
}

/// Optional parts of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Option<Query>,
    pub body: Option<Value>,
    /// Extra headers; these override the dispatcher's own headers.
    pub headers: BTreeMap<String, String>,
    pub expect: ResponseKind,
}

impl RequestOptions {
    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn expect(mut self, kind: ResponseKind) -> Self {
        self.expect = kind;
        self
    }
}

/// Authenticated dispatcher bound to one platform instance and realm.
#[derive(Clone)]
pub struct PlatformService {
    instance_url: String,
    host_name: String,
    tokens: Arc<dyn AccessTokenProvider>,
    http: HttpClient,
}

impl std::fmt::Debug for PlatformService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformService")
            .field("instance_url", &self.instance_url)
            .field("host_name", &self.host_name)
            .field("tokens", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl PlatformService {
    /// Create a dispatcher with a default HTTP client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        instance_url: impl Into<String>,
        host_name: impl Into<String>,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self> {
        let http = HttpClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { instance_url: instance_url.into(), host_name: host_name.into(), tokens, http })
    }

    /// Build a dispatcher whose credentials come from `owner` through a
    /// [`TokenBroker`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(
        config: &ConnectorConfig,
        owner: Option<Arc<dyn MessageOwner>>,
    ) -> Result<Self> {
        let broker = TokenBroker::new(owner, config.host_name.clone())
            .with_target_origin(config.handshake_origin());

        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            instance_url: config.instance_url.trim_end_matches('/').to_string(),
            host_name: config.host_name.clone(),
            tokens: Arc::new(broker),
            http: builder.build()?,
        })
    }

    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Issue one request scoped to `entity_id`.
    ///
    /// # Errors
    /// - `Configuration` when the base URL or entity id is empty, before any
    ///   credential or network activity
    /// - `Request` for non-2xx responses
    /// - `Transport` for network failures
    /// - `Decode` for 2xx bodies that are not JSON
    #[instrument(skip(self, options), fields(%method, path))]
    pub async fn request(
        &self,
        entity_id: &str,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ResponseBody> {
        if self.instance_url.is_empty() {
            return Err(ConnectorError::required("url"));
        }
        if entity_id.is_empty() {
            return Err(ConnectorError::required("entity id"));
        }

        let mut url = Url::parse(&format!("{}{path}", self.instance_url))
            .map_err(|err| ConnectorError::Configuration(format!("invalid request URL: {err}")))?;
        if let Some(query) = &options.query {
            append_query(&mut url, query);
        }

        let authorization = self.tokens.access_token(entity_id).await?;
        let headers = self.headers(&method, &authorization, &options)?;

        debug!(%url, "dispatching platform request");
        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body).map_err(InfraError::from)?;
            request = request.body(bytes);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        let bytes = response.bytes().await;

        if !status.is_success() {
            let body = bytes.unwrap_or_default();
            let error = request_error(status.as_u16(), &body);
            warn!(status = status.as_u16(), message = ?error.message, "platform request failed");
            return Err(error.into());
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(ResponseBody::Json(Value::Object(Map::new())));
        }

        let bytes = bytes.map_err(InfraError::from)?;
        match options.expect {
            ResponseKind::Binary => Ok(ResponseBody::Binary(bytes.to_vec())),
            ResponseKind::Json if bytes.iter().all(u8::is_ascii_whitespace) => {
                Ok(ResponseBody::Json(Value::Object(Map::new())))
            }
            ResponseKind::Json => {
                let value = serde_json::from_slice(&bytes).map_err(InfraError::from)?;
                Ok(ResponseBody::Json(value))
            }
        }
    }

    /// GET returning JSON.
    pub async fn get(&self, entity_id: &str, path: &str, query: Option<Query>) -> Result<Value> {
        let options = RequestOptions { query, ..RequestOptions::default() };
        self.request(entity_id, Method::GET, path, options).await?.into_json()
    }

    /// GET returning the raw body.
    pub async fn get_bytes(
        &self,
        entity_id: &str,
        path: &str,
        query: Option<Query>,
    ) -> Result<Vec<u8>> {
        let options = RequestOptions { query, expect: ResponseKind::Binary, ..Default::default() };
        self.request(entity_id, Method::GET, path, options).await?.into_bytes()
    }

    /// POST a JSON body.
    pub async fn post(&self, entity_id: &str, path: &str, body: Option<Value>) -> Result<Value> {
        let options = RequestOptions { body, ..RequestOptions::default() };
        self.request(entity_id, Method::POST, path, options).await?.into_json()
    }

    /// PATCH a JSON body.
    pub async fn patch(&self, entity_id: &str, path: &str, body: Option<Value>) -> Result<Value> {
        let options = RequestOptions { body, ..RequestOptions::default() };
        self.request(entity_id, Method::PATCH, path, options).await?.into_json()
    }

    /// DELETE, optionally with a JSON body.
    pub async fn delete(&self, entity_id: &str, path: &str, body: Option<Value>) -> Result<Value> {
        let options = RequestOptions { body, ..RequestOptions::default() };
        self.request(entity_id, Method::DELETE, path, options).await?.into_json()
    }

    /// GET deserialized into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        entity_id: &str,
        path: &str,
        query: Option<Query>,
    ) -> Result<T> {
        decode(self.get(entity_id, path, query).await?)
    }

    /// POST `body` and deserialize the reply into `T`.
    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        entity_id: &str,
        path: &str,
        body: &B,
    ) -> Result<T> {
        decode(self.post(entity_id, path, Some(encode(body)?)).await?)
    }

    /// PATCH `body` and deserialize the reply into `T`.
    pub async fn patch_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        entity_id: &str,
        path: &str,
        body: &B,
    ) -> Result<T> {
        decode(self.patch(entity_id, path, Some(encode(body)?)).await?)
    }

    /// DELETE with `body` and deserialize the reply into `T`.
    pub async fn delete_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        entity_id: &str,
        path: &str,
        body: &B,
    ) -> Result<T> {
        decode(self.delete(entity_id, path, Some(encode(body)?)).await?)
    }

    fn headers(
        &self,
        method: &Method,
        authorization: &str,
        options: &RequestOptions,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let accept = match options.expect {
            ResponseKind::Json => JSON_CONTENT_TYPE,
            ResponseKind::Binary => "*/*",
        };
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
        headers.insert(AUTHORIZATION, header_value("Authorization", authorization)?);
        headers.insert(
            HeaderName::from_static(REALM_HOSTNAME_HEADER),
            header_value(REALM_HOSTNAME_HEADER, &self.host_name)?,
        );

        if options.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                ConnectorError::Configuration(format!("invalid header name {name}: {err}"))
            })?;
            let value = header_value(name.as_str(), value)?;
            headers.insert(name, value);
        }

        if matches!(*method, Method::POST | Method::PATCH) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| ConnectorError::Configuration(format!("invalid value for header {name}")))
}

fn encode<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|err| InfraError::from(err).into())
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| InfraError::from(err).into())
}
