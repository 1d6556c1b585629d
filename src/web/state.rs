use crate::prelude::*;
use crate::warcraftlogs::WarcraftLogsApi;

/// Web application global state.
///
/// There is nothing mutable here: every request derives its own view model
/// from scratch, so overlapping fetches cannot interfere with each other.
#[derive(Clone)]
pub struct State {
    pub api: WarcraftLogsApi,

    /// Zone whose boss fights are shown.
    pub target_zone: Arc<String>,
}

impl State {
    pub fn new(api: WarcraftLogsApi, target_zone: String) -> Self {
        Self { api, target_zone: Arc::new(target_zone) }
    }
}
