use std::sync::{Arc, Mutex};
use std::time::Duration;

use pm_client::{ApiClient, ClientConfig, CredentialStore, Navigator, SessionService};

/// Captures forced redirects so tests can count them.
#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().expect("mutex poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: &str) {
        self.redirects
            .lock()
            .expect("mutex poisoned")
            .push(route.to_string());
    }
}

#[allow(dead_code)]
pub struct Harness {
    pub api: ApiClient,
    pub store: CredentialStore,
    pub navigator: Arc<RecordingNavigator>,
    pub session: SessionService,
}

pub fn harness(base_url: &str) -> Harness {
    let store = CredentialStore::new();
    let navigator = Arc::new(RecordingNavigator::default());
    let config = ClientConfig::new(base_url).with_timeout(Duration::from_secs(1));
    let api = ApiClient::new(&config, store.clone(), navigator.clone()).expect("client builds");
    let session = SessionService::new(api.clone());

    Harness {
        api,
        store,
        navigator,
        session,
    }
}
