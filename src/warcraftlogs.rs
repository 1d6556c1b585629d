//! Warcraft Logs v1 API client.

use serde::de::DeserializeOwned;

use crate::error::ReportError;
use crate::prelude::*;
use crate::warcraftlogs::models::{CharacterParse, Report};

pub mod models;

const DEFAULT_BASE_URL: &str = "https://www.warcraftlogs.com/v1";

#[derive(Clone)]
pub struct WarcraftLogsApi {
    client: reqwest::Client,
    base_url: Arc<String>,
    api_key: Arc<String>,
}

impl WarcraftLogsApi {
    pub fn new(api_key: &str, timeout: StdDuration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .gzip(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: Arc::new(DEFAULT_BASE_URL.to_string()),
            api_key: Arc::new(api_key.to_string()),
        })
    }

    /// Points the client at another API root, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Arc::new(base_url.into());
        self
    }

    /// See <https://www.warcraftlogs.com/v1/docs#!/Report/report_fights_code_get>.
    #[instrument(skip_all, fields(code = code))]
    pub async fn get_report(&self, code: &str) -> StdResult<Report, ReportError> {
        let url = format!("{}/report/fights/{}", self.base_url, code);
        self.call(&url, format!("report {code}")).await
    }

    /// See <https://www.warcraftlogs.com/v1/docs#!/Parses/parses_character_character_name_server_name_server_region_get>.
    #[instrument(skip_all, fields(name = name, server = server))]
    pub async fn get_character_parses(
        &self,
        name: &str,
        server: &str,
        region: &str,
    ) -> StdResult<Vec<CharacterParse>, ReportError> {
        let url = format!("{}/parses/character/{}/{}/{}", self.base_url, name, server, region);
        self.call(&url, format!("parses for {name}")).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: String,
    ) -> StdResult<T, ReportError> {
        let start_instant = Instant::now();
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        debug!(
            status = response.status().as_u16(),
            elapsed = ?start_instant.elapsed(),
            resource = resource.as_str(),
        );
        if !response.status().is_success() {
            return Err(ReportError::Http { status: response.status(), resource });
        }
        Ok(response.json().await?)
    }
}
