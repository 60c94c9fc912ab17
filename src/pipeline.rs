use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{classify, ApiError, ApiResult};
use crate::nav::routes;
use crate::store::CredentialStore;

/// Host-side seam for forced navigation. The pipeline calls it exactly once
/// per expiry episode; hosts wire it to their routing layer.
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: &str);
}

/// Navigator for hosts without a routing layer (and for wiring up tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect(&self, _route: &str) {}
}

/// Known nested path of the failure envelope: a human-readable message.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

/// Wraps every outbound call: attaches the bearer credential when one exists,
/// unwraps successful payloads, classifies failures, and applies the one
/// global side effect (session teardown) on authentication expiry.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    store: CredentialStore,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        store: CredentialStore,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            store,
            navigator,
        })
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.dispatch(self.request(Method::GET, path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.dispatch(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.http.request(method, url);
        match self.store.token() {
            // Absent credential: send unauthenticated, the server decides.
            None => builder,
            Some(token) => builder.bearer_auth(token),
        }
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            debug!(status = status.as_u16(), "request succeeded");
            return response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Malformed(err.to_string()));
        }

        let message = response
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|envelope| envelope.message);

        let error = classify(status.as_u16(), message);
        warn!(
            status = status.as_u16(),
            code = error.code(),
            "request rejected"
        );
        self.apply_error_effects(&error);
        Err(error)
    }

    /// Effect step, kept apart from classification. Only expiry has a global
    /// effect, and it fires only on the store's present→absent transition, so
    /// any number of concurrently failing calls yields one redirect.
    fn apply_error_effects(&self, error: &ApiError) {
        if matches!(error, ApiError::AuthenticationExpired(_)) && self.store.clear() {
            warn!("credential expired, tearing down session");
            self.navigator.redirect(routes::LOGIN);
        }
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        // The request never left the process (e.g. unserializable body).
        ApiError::Malformed(err.to_string())
    } else {
        ApiError::Unreachable
    }
}
