use std::sync::Arc;

use reqwest::Client;
use tokio::sync::OnceCell;

use super::{
    config::Config,
    faculty::{self, FacultyRecord},
};

pub struct State {
    pub config: Config,
    pub http: Client,
    faculty: OnceCell<Vec<FacultyRecord>>,
}

impl State {
    pub fn new() -> Arc<Self> {
        Self::from_config(Config::load())
    }

    /// Tests build state from a hand-made config instead of the environment.
    pub fn from_config(config: Config) -> Arc<Self> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .expect("HTTP client misconfigured!");

        Arc::new(Self {
            config,
            http,
            faculty: OnceCell::new(),
        })
    }

    /// Faculty records, loaded from disk on first access and cached for the
    /// process lifetime. Concurrent first calls race on the barrier, not on
    /// the data.
    pub async fn faculty(&self) -> &[FacultyRecord] {
        self.faculty
            .get_or_init(|| faculty::load(&self.config.faculty_path))
            .await
    }
}
