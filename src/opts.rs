//! CLI options.

use clap::Parser;

use crate::prelude::*;

#[derive(Parser)]
#[command(version, about)]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "RAID_DASHBOARD_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry traces sample rate
    #[arg(long, env = "RAID_DASHBOARD_TRACES_SAMPLE_RATE", default_value = "0.0")]
    pub traces_sample_rate: f32,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    /// Runs the web application
    Web(WebOpts),
}

#[derive(clap::Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value = "8081")]
    pub port: u16,

    /// Warcraft Logs v1 API key
    #[arg(long, env = "WCL_API_KEY")]
    pub api_key: String,

    /// Zone whose boss fights make it onto the dashboard
    #[arg(long, default_value = "Liberation of Undermine")]
    pub target_zone: String,

    /// Warcraft Logs API request timeout
    #[arg(long, default_value = "30s", value_parser = humantime::parse_duration)]
    pub request_timeout: StdDuration,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_opts_ok() {
        Opts::command().debug_assert();
    }
}
