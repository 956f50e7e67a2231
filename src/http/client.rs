//! The e-conomic API client.

use crate::config::Credentials;
use crate::error::{ApiErrorDetail, Error, Result};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Base URL of the legacy REST API.
pub const REST_BASE_URL: &str = "https://restapi.e-conomic.com";

/// Base URL of the OpenAPI-style API family (journals, dimensions, ...).
pub const OPENAPI_BASE_URL: &str = "https://apis.e-conomic.com";

const APP_SECRET_HEADER: &str = "X-AppSecretToken";
const AGREEMENT_GRANT_HEADER: &str = "X-AgreementGrantToken";

/// Builder for [`EconomicClient`].
pub struct EconomicClientBuilder {
    credentials: Credentials,
    rest_base_url: String,
    api_base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl EconomicClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_base_url: REST_BASE_URL.to_string(),
            api_base_url: OPENAPI_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("economic-sync/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the legacy REST base URL.
    #[must_use]
    pub fn rest_base_url(mut self, url: impl Into<String>) -> Self {
        self.rest_base_url = url.into();
        self
    }

    /// Override the OpenAPI base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client. Fails with a configuration error when either
    /// credential token is empty, before any network I/O can happen.
    pub fn build(self) -> Result<EconomicClient> {
        self.credentials.validate()?;
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(Error::Http)?;
        Ok(EconomicClient {
            client,
            credentials: self.credentials,
            rest_base_url: self.rest_base_url.trim_end_matches('/').to_string(),
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Client for the e-conomic REST and OpenAPI families.
///
/// Holds the credential pair and one `reqwest::Client`; every operation is
/// an independent request/response against the remote system of record, so
/// a client can be shared freely between tasks. Operations that create
/// entities for the same business key must not run concurrently (see
/// [`EconomicClient::get_or_create_customer`]).
pub struct EconomicClient {
    client: Client,
    credentials: Credentials,
    rest_base_url: String,
    api_base_url: String,
}

impl EconomicClient {
    /// Create a client with the default vendor hosts.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Create a builder for customizing hosts or timeouts.
    pub fn builder(credentials: Credentials) -> EconomicClientBuilder {
        EconomicClientBuilder::new(credentials)
    }

    // ========================================================================
    // Legacy REST API
    // ========================================================================

    /// Perform one legacy REST call and decode the JSON response.
    pub(crate) async fn rest_json<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.rest_send(method, path, query, body).await?;
        let decoded = response.json().await.map_err(Error::Http)?;
        Ok(decoded)
    }

    /// Perform one legacy REST call and discard the response body.
    pub(crate) async fn rest_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.rest_send(method, path, &[], body).await?;
        Ok(())
    }

    /// GET from the legacy REST API, mapping a vendor 404 to `None`.
    pub(crate) async fn rest_get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>> {
        match self
            .rest_json::<(), T>(Method::GET, path, &[], None)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn rest_send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let path = path.trim_start_matches('/');
        let url = format!("{}/{}", self.rest_base_url, path);

        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(APP_SECRET_HEADER, &self.credentials.app_secret_token)
            .header(
                AGREEMENT_GRANT_HEADER,
                &self.credentials.agreement_grant_token,
            )
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        // An absent body stays an empty payload, never the literal `null`.
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            error!("error in calling e-conomic ({method} {url}): {e}");
            Error::Http(e)
        })?;
        let status = response.status();
        debug!("status code from e-conomic: {} ({method} {path})", status.as_u16());

        if status.as_u16() >= 400 {
            let text = response.text().await.unwrap_or_default();
            error!("error in calling e-conomic ({method} {url}): {text}");
            let error_code = extract_error_code(&text);
            return Err(Error::RestApi {
                method: method.to_string(),
                path: path.to_string(),
                status: status.as_u16(),
                body: text,
                error_code,
            });
        }
        Ok(response)
    }

    // ========================================================================
    // OpenAPI family
    // ========================================================================

    /// Perform one OpenAPI call and decode the JSON response.
    pub(crate) async fn api_json<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.api_send(method, path, query, body).await?;
        let decoded = response.json().await.map_err(Error::Http)?;
        Ok(decoded)
    }

    /// Perform one OpenAPI call and discard the response body.
    pub(crate) async fn api_unit<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.api_send(method, path, query, body).await?;
        Ok(())
    }

    async fn api_send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.api_base_url, path.trim_start_matches('/'));

        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(APP_SECRET_HEADER, &self.credentials.app_secret_token)
            .header(
                AGREEMENT_GRANT_HEADER,
                &self.credentials.agreement_grant_token,
            )
            .header("Accept", "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        // Content-Type is only set when a body is attached.
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            error!("error in calling e-conomic ({method} {url}): {e}");
            Error::Http(e)
        })?;
        let status = response.status();
        debug!("status code from e-conomic: {} ({method} {path})", status.as_u16());

        if status.as_u16() >= 400 {
            return Err(self.problem_error(method, path, status, response).await);
        }
        Ok(response)
    }

    async fn problem_error(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        response: reqwest::Response,
    ) -> Error {
        let text = response.text().await.unwrap_or_default();
        error!("error in calling e-conomic ({method} {path}): {text}");
        let doc: ProblemDocument = serde_json::from_str(&text).unwrap_or(ProblemDocument {
            title: text,
            ..ProblemDocument::default()
        });
        let mut errors = doc.errors;
        if !doc.error_code.is_empty() {
            errors.push(ApiErrorDetail {
                property: String::new(),
                message: doc.title.clone(),
                error_code: doc.error_code,
            });
        }
        Error::Api {
            method: method.to_string(),
            path: path.to_string(),
            status: status.as_u16(),
            title: doc.title,
            errors,
        }
    }
}

impl std::fmt::Debug for EconomicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EconomicClient")
            .field("rest_base_url", &self.rest_base_url)
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

/// The OpenAPI problem document attached to failed calls.
#[derive(Debug, Default, Deserialize)]
struct ProblemDocument {
    #[serde(default)]
    title: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
    #[serde(rename = "errorCode", default)]
    error_code: String,
}

/// Pull a vendor error code out of a legacy REST error body. The body is
/// usually JSON carrying an `errorCode` field somewhere, but the vendor
/// does not guarantee it, so fall back to scanning for the field name.
fn extract_error_code(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return find_error_code(&value);
    }
    let idx = body.find("\"errorCode\"")?;
    let rest = &body[idx + "\"errorCode\"".len()..];
    let start = rest.find('"')? + 1;
    let end = rest[start..].find('"')? + start;
    Some(rest[start..end].to_string())
}

fn find_error_code(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(code)) = map.get("errorCode") {
                return Some(code.clone());
            }
            map.values().find_map(find_error_code)
        }
        serde_json::Value::Array(items) => items.iter().find_map(find_error_code),
        _ => None,
    }
}
