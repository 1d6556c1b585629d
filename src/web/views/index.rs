use maud::html;
use poem::http::StatusCode;
use poem::web::cookie::CookieJar;
use poem::web::{Data, Query, Redirect};
use poem::{handler, IntoResponse, Response};
use serde::Deserialize;

use crate::prelude::*;
use crate::web::partials::{document, report_code_search};
use crate::web::responses;
use crate::web::state::State;
use crate::web::theme::Theme;

#[derive(Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    code: String,
}

/// Home page with the report code form. A submitted code redirects to its report page.
#[handler]
#[instrument(skip_all)]
pub async fn get(
    Query(params): Query<QueryParams>,
    jar: &CookieJar,
    Data(state): Data<&State>,
) -> poem::Result<Response> {
    let code = params.code.trim();
    if !code.is_empty() {
        return Ok(Redirect::see_other(format!("/report/{code}")).into_response());
    }
    let markup = document(
        Theme::from_cookies(jar),
        "/",
        None,
        html! {
            section.hero.is-fullheight {
                div.hero-body {
                    div.container {
                        div.columns {
                            div.column."is-6"."is-offset-3" {
                                h1.title { "Raid Dashboard" }
                                p.subtitle {
                                    "Player performance in " strong { (state.target_zone.as_str()) }
                                }
                                (report_code_search(""))
                            }
                        }
                    }
                }
            }
        },
    );
    Ok(responses::html(StatusCode::OK, markup))
}
