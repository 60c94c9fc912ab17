pub mod config;
pub mod error;
pub mod guard;
pub mod nav;
pub mod pipeline;
pub mod profile;
pub mod session;
pub mod store;

pub use config::{load_client_config, ClientConfig};
pub use error::{classify, ApiError, ApiResult};
pub use guard::{decide, GuardDecision, RouteGuard};
pub use nav::{dashboard_route, nav_items, routes, NavItem};
pub use pipeline::{ApiClient, Navigator, NoopNavigator};
pub use profile::{AuthResponse, Role, UserProfile};
pub use session::{LoginCredentials, RegisterDraft, SessionService};
pub use store::{CredentialStore, MemoryStorage, StorageBackend};
