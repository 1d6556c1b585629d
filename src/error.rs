//! Typed errors of the report fetch pipeline.

use poem::http::StatusCode;
use thiserror::Error;

/// Aborts the whole pipeline; the message is rendered verbatim on the error page.
///
/// There are no retries and no partial results: the first failure wins.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Non-2xx response from the Warcraft Logs API.
    #[error("HTTP error {status} while fetching {resource}")]
    Http {
        status: StatusCode,
        /// Identity of the failing resource, e.g. the report code or the player name.
        resource: String,
    },

    /// The report exports no characters, so there is no roster to fetch parses for.
    #[error("no players found in the report's exported characters")]
    NoExportedCharacters,

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ReportError {
    /// Status code of the rendered error page.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Http { .. } | Self::Network(_) => StatusCode::BAD_GATEWAY,
            Self::NoExportedCharacters => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_names_the_resource_ok() {
        let error = ReportError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            resource: "parses for Aldra".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP error 500 Internal Server Error while fetching parses for Aldra",
        );
    }

    #[test]
    fn status_codes_ok() {
        assert_eq!(
            ReportError::NoExportedCharacters.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY,
        );
    }
}
