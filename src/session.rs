use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::pipeline::ApiClient;
use crate::profile::{AuthResponse, Role, UserProfile};
use crate::store::CredentialStore;

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterDraft {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Orchestrates the session lifecycle. All credential-store mutation in the
/// crate happens here or in the pipeline's expiry teardown; on success the
/// token and profile are written in one atomic step.
#[derive(Clone)]
pub struct SessionService {
    api: ApiClient,
    store: CredentialStore,
}

impl SessionService {
    pub fn new(api: ApiClient) -> Self {
        let store = api.store().clone();
        Self { api, store }
    }

    pub async fn register(&self, draft: &RegisterDraft) -> ApiResult<AuthResponse> {
        validate_register(draft)?;
        let payload: AuthResponse = self.api.post("/auth/register", draft).await?;
        self.store.write(payload.token.clone(), payload.profile());
        info!(role = %payload.role, "registered and signed in");
        Ok(payload)
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthResponse> {
        validate_login(credentials)?;
        let payload: AuthResponse = self.api.post("/auth/login", credentials).await?;
        self.store.write(payload.token.clone(), payload.profile());
        info!(role = %payload.role, "signed in");
        Ok(payload)
    }

    /// Local teardown only; succeeds without network confirmation.
    pub fn logout(&self) {
        self.store.clear();
        info!("signed out");
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.store.profile()
    }

    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_present()
    }
}

fn validate_login(credentials: &LoginCredentials) -> ApiResult<()> {
    if credentials.email.trim().is_empty() {
        return Err(ApiError::ValidationFailed("Email is required".to_string()));
    }
    if credentials.password.is_empty() {
        return Err(ApiError::ValidationFailed(
            "Password is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_register(draft: &RegisterDraft) -> ApiResult<()> {
    let full_name = draft.full_name.trim();
    if full_name.is_empty() {
        return Err(ApiError::ValidationFailed(
            "Full Name is required".to_string(),
        ));
    }
    if full_name.chars().count() < 2 {
        return Err(ApiError::ValidationFailed(
            "Full Name must be at least 2 characters".to_string(),
        ));
    }

    if draft.email.trim().is_empty() {
        return Err(ApiError::ValidationFailed("Email is required".to_string()));
    }
    if !is_plausible_email(draft.email.trim()) {
        return Err(ApiError::ValidationFailed("Email is invalid".to_string()));
    }

    if draft.password.is_empty() {
        return Err(ApiError::ValidationFailed(
            "Password is required".to_string(),
        ));
    }
    if draft.password.chars().count() < 6 {
        return Err(ApiError::ValidationFailed(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    Ok(())
}

fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}
