//! Turns raw report and parse data into the dashboard's derived views.
//!
//! Everything here is pure: the fetch pipeline feeds it one snapshot, and the
//! results are recomputed from scratch on every request.

use std::cmp::Reverse;

use itertools::Itertools;

pub use self::models::*;
use crate::prelude::*;
use crate::warcraftlogs::models::Report;

pub mod models;

/// Left-joins the exported characters against the friendlies on name and server.
///
/// A character without a matching friendly keeps `None` class and spec.
pub fn build_roster(report: &Report) -> Vec<Player> {
    report
        .exported_characters
        .iter()
        .map(|character| {
            let friendly = report.friendlies.iter().find(|friendly| {
                friendly.name == character.name
                    && friendly.server.as_deref() == Some(character.server.as_str())
            });
            Player {
                name: character.name.clone(),
                server: character.server.clone(),
                region: character.region.clone(),
                class: friendly.map(|friendly| friendly.class.clone()),
                spec: friendly.and_then(|friendly| friendly.spec().map(str::to_string)),
            }
        })
        .collect()
}

/// Groups the tagged parses into ranked per-fight sets, keyed by display name.
///
/// Only raid fights of the target zone are retained, and only parses recorded
/// for this very report and fight count. Fights sharing a display name (several
/// pulls of the same boss) collapse into one entry: the last pull wins, at the
/// position where the name was first seen.
pub fn group_by_fight(
    report: &Report,
    report_code: &str,
    target_zone: &str,
    parses: &[TaggedParse],
) -> Vec<FightParses> {
    let mut grouped = Vec::<FightParses>::new();
    let mut index_by_name = AHashMap::<String, usize>::default();

    for fight in report.fights.iter().filter(|fight| fight.is_raid_fight(target_zone)) {
        let mut ranked = parses
            .iter()
            .filter(|tagged| {
                tagged.parse.report_id == report_code && tagged.parse.fight_id == fight.id
            })
            .map(|tagged| RankedParse {
                player_name: tagged.player_name.clone(),
                percentile: tagged.parse.floored_percentile(),
                spec: tagged.parse.spec.clone(),
                class: tagged.parse.class.clone(),
            })
            .collect_vec();
        // The sort is stable, tied players keep their batch order.
        ranked.sort_by_key(|parse| Reverse(parse.percentile));

        let entry =
            FightParses { name: fight.display_name(), fight: fight.clone(), parses: ranked };
        match index_by_name.get(&entry.name) {
            Some(&index) => grouped[index] = entry,
            None => {
                index_by_name.insert(entry.name.clone(), grouped.len());
                grouped.push(entry);
            }
        }
    }
    grouped
}

/// Averages each player's percentiles across all fights.
///
/// Fights are visited in report order and parses in rank order, so the
/// retained class and spec are those of the last parse visited. The mean is
/// rounded half away from zero (`f64::round`). Players come out in first-seen
/// order, then stably sorted descending by average.
pub fn average_percentiles(fight_parses: &[FightParses]) -> Vec<PlayerAverage> {
    struct Accumulator {
        player_name: String,
        class: Option<String>,
        spec: Option<String>,
        sum: i64,
        count: usize,
    }

    let mut accumulators = Vec::<Accumulator>::new();
    let mut index_by_name = AHashMap::<String, usize>::default();

    for fight in fight_parses {
        for parse in &fight.parses {
            let index = *index_by_name.entry(parse.player_name.clone()).or_insert_with(|| {
                accumulators.push(Accumulator {
                    player_name: parse.player_name.clone(),
                    class: None,
                    spec: None,
                    sum: 0,
                    count: 0,
                });
                accumulators.len() - 1
            });
            let accumulator = &mut accumulators[index];
            accumulator.sum += i64::from(parse.percentile);
            accumulator.count += 1;
            accumulator.class = parse.class.clone();
            accumulator.spec = parse.spec.clone();
        }
    }

    let mut averages = accumulators
        .into_iter()
        .map(|accumulator| PlayerAverage {
            player_name: accumulator.player_name,
            class: accumulator.class,
            spec: accumulator.spec,
            average: (accumulator.sum as f64 / accumulator.count as f64).round() as i32,
            n_fights: accumulator.count,
        })
        .collect_vec();
    averages.sort_by_key(|average| Reverse(average.average));
    averages
}
