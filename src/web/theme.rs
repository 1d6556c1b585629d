//! Color theme, carried in a cookie instead of ambient global state.

use std::str::FromStr;

use poem::http::StatusCode;
use poem::web::cookie::{Cookie, CookieJar};
use poem::web::{Path, Query, Redirect};
use poem::{handler, IntoResponse, Response};
use serde::Deserialize;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    const COOKIE_NAME: &'static str = "theme";
    const COOKIE_MAX_AGE: StdDuration = StdDuration::from_secs(365 * 86400);

    pub fn from_cookies(jar: &CookieJar) -> Self {
        jar.get(Self::COOKIE_NAME)
            .and_then(|cookie| Self::from_str(cookie.value_str()).ok())
            .unwrap_or_default()
    }

    pub fn store(self, jar: &CookieJar) {
        let mut cookie = Cookie::new_with_str(Self::COOKIE_NAME, self.as_str());
        cookie.set_path("/");
        cookie.set_max_age(Self::COOKIE_MAX_AGE);
        jar.add(cookie);
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(anyhow!("unknown theme: {value}")),
        }
    }
}

#[derive(Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    next: Option<String>,
}

/// Stores the chosen theme and returns to the previous page.
#[handler]
#[instrument(skip_all, fields(theme = theme.as_str()))]
pub async fn switch(
    Path(theme): Path<String>,
    Query(params): Query<QueryParams>,
    jar: &CookieJar,
) -> poem::Result<Response> {
    let theme = Theme::from_str(&theme)
        .map_err(|error| poem::Error::from_string(error.to_string(), StatusCode::BAD_REQUEST))?;
    theme.store(jar);
    // Only same-site targets, the parameter is attacker-controlled.
    let next = params
        .next
        .filter(|next| next.starts_with('/') && !next.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());
    Ok(Redirect::see_other(next).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark_ok() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn from_str_ok() -> Result {
        assert_eq!(Theme::from_str("light")?, Theme::Light);
        assert!(Theme::from_str("solarized").is_err());
        Ok(())
    }
}
