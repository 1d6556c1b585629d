//! The web application.

use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, CookieJarManager, Tracing};
use poem::{get, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::warcraftlogs::WarcraftLogsApi;
use crate::web::state::State;

mod middleware;
mod partials;
mod responses;
mod state;
#[cfg(test)]
mod test;
mod theme;
mod views;

/// Runs the web application.
pub async fn run(opts: WebOpts) -> Result {
    let api = WarcraftLogsApi::new(&opts.api_key, opts.request_timeout)?;
    let state = State::new(api, opts.target_zone);
    info!(host = opts.host.as_str(), port = opts.port, "listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run(create_app(state))
        .await?;
    Ok(())
}

fn create_app(state: State) -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get))
        .at("/report/:code", get(views::report::get))
        .at("/theme/:theme", get(theme::switch))
        .at("/health", get(views::api::get_health))
        .data(state)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(middleware::ErrorMiddleware)
        .with(middleware::SecurityHeadersMiddleware)
        .with(middleware::SentryMiddleware)
        // Outermost, the inner layers read the jar.
        .with(CookieJarManager::new())
}
