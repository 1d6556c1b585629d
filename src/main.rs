use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod aggregator;
mod classes;
mod error;
mod opts;
mod prelude;
mod tracing;
mod warcraftlogs;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    info!(version = clap::crate_version!(), "starting up…");
    match opts.subcommand {
        Subcommand::Web(opts) => web::run(opts).await,
    }
}
