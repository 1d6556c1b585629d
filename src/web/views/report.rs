use maud::{html, Markup};
use poem::http::StatusCode;
use poem::web::cookie::CookieJar;
use poem::web::{Data, Path, Query};
use poem::{handler, Response};
use serde::Deserialize;

use self::view_model::ViewModel;
use crate::aggregator::FightParses;
use crate::error::ReportError;
use crate::prelude::*;
use crate::web::partials::{
    class_colored_name, document, format_duration_ms, report_code_search, PercentileTag,
};
use crate::web::responses;
use crate::web::state::State;
use crate::web::theme::Theme;

pub mod view_model;

#[derive(Deserialize)]
pub struct QueryParams {
    pub fight: Option<String>,
}

/// Report dashboard: the roster, per-fight rankings and cross-fight averages.
#[handler]
#[instrument(skip_all, fields(code = code.as_str()))]
pub async fn get(
    Path(code): Path<String>,
    Query(params): Query<QueryParams>,
    jar: &CookieJar,
    Data(state): Data<&State>,
) -> poem::Result<Response> {
    let theme = Theme::from_cookies(jar);
    match ViewModel::new(&code, params.fight.as_deref(), state).await {
        Ok(view_model) => {
            Ok(responses::html(StatusCode::OK, dashboard(theme, &view_model, state)))
        }
        Err(error) => {
            warn!(code = code.as_str(), "{:#}", error);
            Ok(responses::html(error.status_code(), error_page(theme, &code, &error)))
        }
    }
}

fn error_page(theme: Theme, code: &str, error: &ReportError) -> Markup {
    document(
        theme,
        &format!("/report/{code}"),
        Some("Error"),
        html! {
            section.section {
                div.container {
                    (report_code_search(code))
                    article.message.is-danger."mt-5" {
                        div.message-header { p { "Error" } }
                        div.message-body { (error.to_string()) }
                    }
                }
            }
        },
    )
}

fn dashboard(theme: Theme, view_model: &ViewModel, state: &State) -> Markup {
    document(
        theme,
        &format!("/report/{}", view_model.code),
        Some(&view_model.title),
        html! {
            section.section {
                div.container {
                    (report_code_search(&view_model.code))
                    (roster_card(view_model))
                    @if !view_model.fight_parses.is_empty() {
                        (fights_card(view_model, state))
                    }
                    @if !view_model.averages.is_empty() {
                        (averages_card(view_model))
                    }
                }
            }
        },
    )
}

fn roster_card(view_model: &ViewModel) -> Markup {
    html! {
        div.box."mt-5" {
            h2.title."is-4" { (view_model.title) }
            p.subtitle."is-6" { "Raid composition (" (view_model.roster.len()) " players)" }
            div.columns.is-multiline {
                @for player in &view_model.roster {
                    div.column."is-3" {
                        p { (class_colored_name(&player.name, player.class.as_deref())) }
                        @if let (Some(spec), Some(class)) = (&player.spec, &player.class) {
                            p."is-size-7".has-text-grey { (spec) " " (class) }
                        }
                        p."is-size-7".has-text-grey {
                            (player.server) " (" (player.region) ")"
                        }
                    }
                }
            }
        }
    }
}

fn fights_card(view_model: &ViewModel, state: &State) -> Markup {
    let selected = view_model.selected();
    html! {
        div.box {
            h2.title."is-4" { (state.target_zone.as_str()) " boss fights" }
            div.tabs {
                ul {
                    @for fight in &view_model.fight_parses {
                        @let is_selected =
                            selected.map_or(false, |selected| selected.name == fight.name);
                        li."is-active"[is_selected] {
                            a href=(format!("/report/{}?fight={}", view_model.code, fight.name)) {
                                (fight.name)
                            }
                        }
                    }
                }
            }
            @if let Some(fight) = selected {
                (fight_panel(fight))
            }
        }
    }
}

fn fight_panel(fight: &FightParses) -> Markup {
    html! {
        div.level {
            div.level-left {
                h3.title."is-5" { (fight.name) " performance" }
            }
            div.level-right {
                p.has-text-grey {
                    "Fight ID: " (fight.fight.id)
                    " · duration " (format_duration_ms(fight.fight.duration_ms()))
                    " "
                    @match fight.fight.kill {
                        Some(true) => { span.tag.is-success { "Kill" } }
                        _ => { span.tag.is-danger { "Wipe" } }
                    }
                }
            }
        }
        @if fight.parses.is_empty() {
            p.has-text-centered.has-text-grey { "No parse data found for this fight." }
        } @else {
            table.table.is-fullwidth.is-striped {
                thead {
                    tr {
                        th { "Rank" }
                        th { "Player" }
                        th { "Spec" }
                        th { "Percentile" }
                    }
                }
                tbody {
                    @for (index, parse) in fight.parses.iter().enumerate() {
                        tr {
                            td { ((index + 1)) }
                            td { (class_colored_name(&parse.player_name, parse.class.as_deref())) }
                            td { (parse.spec.as_deref().unwrap_or("")) }
                            td { (PercentileTag(parse.percentile)) }
                        }
                    }
                }
            }
        }
    }
}

fn averages_card(view_model: &ViewModel) -> Markup {
    html! {
        div.box {
            h2.title."is-4" { "Player average performance" }
            p.subtitle."is-6" { "Average parse percentiles across all fights" }
            table.table.is-fullwidth.is-striped {
                thead {
                    tr {
                        th { "Rank" }
                        th { "Player" }
                        th { "Class/Spec" }
                        th { "Avg. percentile" }
                        th { "Fights" }
                    }
                }
                tbody {
                    @for (index, average) in view_model.averages.iter().enumerate() {
                        tr {
                            td { ((index + 1)) }
                            td {
                                (class_colored_name(
                                    &average.player_name,
                                    average.class.as_deref(),
                                ))
                            }
                            td {
                                (average.spec.as_deref().unwrap_or(""))
                                " "
                                (average.class.as_deref().unwrap_or(""))
                            }
                            td { (PercentileTag(average.average)) }
                            td { (average.n_fights) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{Player, PlayerAverage, RankedParse};
    use crate::warcraftlogs::models::Fight;
    use crate::warcraftlogs::WarcraftLogsApi;

    fn view_model() -> ViewModel {
        ViewModel {
            code: "a1b2c3".to_string(),
            title: "Wednesday clear".to_string(),
            roster: vec![Player {
                name: "Aldra".to_string(),
                server: "Tarren Mill".to_string(),
                region: "EU".to_string(),
                class: Some("Mage".to_string()),
                spec: Some("Frost".to_string()),
            }],
            fight_parses: vec![FightParses {
                name: "Vexie".to_string(),
                fight: Fight {
                    id: 1,
                    name: Some("Vexie".to_string()),
                    boss: 3009,
                    zone_name: Some("Liberation of Undermine".to_string()),
                    start: Some(0),
                    end: Some(65000),
                    kill: Some(true),
                },
                parses: vec![RankedParse {
                    player_name: "Aldra".to_string(),
                    percentile: 80,
                    spec: Some("Frost".to_string()),
                    class: Some("Mage".to_string()),
                }],
            }],
            selected_fight: Some("Vexie".to_string()),
            averages: vec![PlayerAverage {
                player_name: "Aldra".to_string(),
                class: Some("Mage".to_string()),
                spec: Some("Frost".to_string()),
                average: 80,
                n_fights: 1,
            }],
        }
    }

    #[test]
    fn dashboard_renders_ok() -> Result {
        let api = WarcraftLogsApi::new("test-key", StdDuration::from_secs(5))?;
        let state = State::new(api, "Liberation of Undermine".to_string());
        let markup = dashboard(Theme::Dark, &view_model(), &state).into_string();
        assert!(markup.contains("Wednesday clear"));
        assert!(markup.contains("Liberation of Undermine boss fights"));
        assert!(markup.contains("1:05"));
        assert!(markup.contains("Kill"));
        // The rank column counts from one.
        assert!(markup.contains("<td>1</td>"));
        assert!(markup.contains("color: #3FC7EB"));
        Ok(())
    }

    #[test]
    fn error_page_shows_the_message_ok() {
        let markup =
            error_page(Theme::Dark, "a1b2c3", &ReportError::NoExportedCharacters).into_string();
        assert!(markup.contains("no players found in the report's exported characters"));
    }
}
