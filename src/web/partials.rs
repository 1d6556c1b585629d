//! Shared page building blocks and presentation mappers.

use clap::crate_version;
use maud::{html, Markup, Render, DOCTYPE};

use crate::classes;
use crate::web::theme::Theme;

/// Renders the document shell around the page content.
pub fn document(theme: Theme, path: &str, title: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.as_str()) {
            head {
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta charset="UTF-8";
                link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css"
                    crossorigin="anonymous"
                    referrerpolicy="no-referrer";
                title { (title.unwrap_or("Raid Dashboard")) }
            }
            body {
                (navbar(theme, path))
                (content)
                (footer())
            }
        }
    }
}

fn navbar(theme: Theme, path: &str) -> Markup {
    let toggled = theme.toggled();
    html! {
        nav.navbar role="navigation" aria-label="main navigation" {
            div.navbar-brand {
                a.navbar-item href="/" { strong { "Raid Dashboard" } }
            }
            div.navbar-end {
                a.navbar-item href=(format!("/theme/{}?next={}", toggled.as_str(), path)) {
                    @match toggled {
                        Theme::Light => { "Switch to light theme" }
                        Theme::Dark => { "Switch to dark theme" }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.footer {
            div.content.has-text-centered {
                p {
                    "Raid Dashboard " (crate_version!())
                    " · data from "
                    a href="https://www.warcraftlogs.com" { "Warcraft Logs" }
                }
            }
        }
    }
}

/// Report code form, submitting redirects to the report page.
pub fn report_code_search(value: &str) -> Markup {
    html! {
        form action="/" method="GET" {
            div.field.has-addons {
                div.control.is-expanded {
                    input.input
                        type="search"
                        name="code"
                        value=(value)
                        placeholder="Report code"
                        autocapitalize="none"
                        autocomplete="off"
                        spellcheck="false"
                        required;
                }
                div.control {
                    button.button.is-link type="submit" { "Fetch report" }
                }
            }
        }
    }
}

/// Player name colored by class.
pub fn class_colored_name(name: &str, class: Option<&str>) -> Markup {
    html! {
        span style=(format!("color: {}", classes::class_color(class))) { (name) }
    }
}

/// Badge tier of a percentile, mirroring item rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Tier {
    /// Lower bounds are inclusive.
    pub const fn from_percentile(percentile: i32) -> Self {
        if percentile >= 95 {
            Self::Legendary
        } else if percentile >= 75 {
            Self::Epic
        } else if percentile >= 50 {
            Self::Rare
        } else if percentile >= 25 {
            Self::Uncommon
        } else {
            Self::Common
        }
    }

    pub const fn tag_class(self) -> &'static str {
        match self {
            Self::Legendary => "is-warning",
            Self::Epic => "is-link",
            Self::Rare => "is-info",
            Self::Uncommon => "is-success",
            Self::Common => "is-light",
        }
    }
}

/// Bulma tag carrying the percentile in its tier color.
pub struct PercentileTag(pub i32);

impl Render for PercentileTag {
    fn render(&self) -> Markup {
        html! {
            span.tag.(Tier::from_percentile(self.0).tag_class()) { (self.0) }
        }
    }
}

/// Formats a millisecond duration as `M:SS`, minutes unpadded.
///
/// Missing and non-positive durations come out as `0:00`.
pub fn format_duration_ms(duration_ms: Option<i64>) -> String {
    match duration_ms {
        Some(duration_ms) if duration_ms > 0 => {
            let seconds = duration_ms / 1000;
            format!("{}:{:02}", seconds / 60, seconds % 60)
        }
        _ => "0:00".to_string(),
    }
}
