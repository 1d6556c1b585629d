use futures::future::try_join_all;
use itertools::Itertools;

use crate::aggregator::{self, FightParses, Player, PlayerAverage, TaggedParse};
use crate::error::ReportError;
use crate::prelude::*;
use crate::warcraftlogs::WarcraftLogsApi;
use crate::web::state::State;

/// Everything the report page renders, derived within one request.
pub struct ViewModel {
    pub code: String,
    pub title: String,
    pub roster: Vec<Player>,
    pub fight_parses: Vec<FightParses>,
    pub selected_fight: Option<String>,
    pub averages: Vec<PlayerAverage>,
}

impl ViewModel {
    /// Runs the whole fetch pipeline: the report, the roster, the concurrent
    /// parse batch, grouping and averaging.
    ///
    /// The batch is all-or-nothing: the first failing request aborts the
    /// pipeline and nothing derived is kept.
    #[instrument(skip_all, fields(code = code))]
    pub async fn new(
        code: &str,
        selected_fight: Option<&str>,
        state: &State,
    ) -> StdResult<Self, ReportError> {
        let report = state.api.get_report(code).await?;
        if report.exported_characters.is_empty() {
            return Err(ReportError::NoExportedCharacters);
        }
        let roster = aggregator::build_roster(&report);
        info!(n_players = roster.len(), "fetching parses…");

        let parses =
            try_join_all(roster.iter().map(|player| fetch_tagged_parses(&state.api, player)))
                .await?
                .into_iter()
                .flatten()
                .collect_vec();

        let fight_parses = aggregator::group_by_fight(&report, code, &state.target_zone, &parses);
        let averages = aggregator::average_percentiles(&fight_parses);
        let selected_fight = selected_fight
            .and_then(|name| fight_parses.iter().find(|fight| fight.name == name))
            .or_else(|| fight_parses.first())
            .map(|fight| fight.name.clone());

        Ok(Self {
            code: code.to_string(),
            title: report.display_title().to_string(),
            roster,
            fight_parses,
            selected_fight,
            averages,
        })
    }

    pub fn selected(&self) -> Option<&FightParses> {
        let name = self.selected_fight.as_deref()?;
        self.fight_parses.iter().find(|fight| fight.name == name)
    }
}

async fn fetch_tagged_parses(
    api: &WarcraftLogsApi,
    player: &Player,
) -> StdResult<Vec<TaggedParse>, ReportError> {
    let parses = api.get_character_parses(&player.name, &player.server, &player.region).await?;
    Ok(parses
        .into_iter()
        .map(|parse| TaggedParse { player_name: player.name.clone(), parse })
        .collect())
}
