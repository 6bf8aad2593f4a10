use anyhow::Context;
use verity_client::BackendClient;
use verity_config::VerityConfig;
use verity_session::Session;
use verity_store::{FileStore, ResultStore};

pub type AppSession = Session<BackendClient, FileStore>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: VerityConfig,
    pub session: AppSession,
}

impl AppContext {
    /// Build the backend client, open the history store, start a session.
    pub fn init(config: VerityConfig) -> anyhow::Result<Self> {
        let client =
            BackendClient::new(&config.api).context("failed to build analysis backend client")?;

        let history_dir = config.history.resolved_dir();
        std::fs::create_dir_all(&history_dir).with_context(|| {
            format!("failed to create history directory {}", history_dir.display())
        })?;
        let store = FileStore::new(&history_dir).with_quota(config.history.quota());
        let history = ResultStore::with_capacity(store, config.history.capacity);
        tracing::debug!(
            dir = %history_dir.display(),
            entries = history.len(),
            backend = client.base_url(),
            "application context ready"
        );

        let session = Session::new(client, history, config.share.page_url.clone());
        Ok(Self { config, session })
    }
}
