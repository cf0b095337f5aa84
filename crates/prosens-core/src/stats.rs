// Descriptive statistics over the player store: per-team extremes, per-team
// mean and median rankings, and whole-dataset summary.
//
// Every report reads an ordered view of the store (`by_team` or `by_edpi`);
// none of them reorder the store itself.

use crate::player::Player;
use crate::store::PlayerStore;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Lowest and highest eDPI player within one team.
#[derive(Debug, Clone, Copy)]
pub struct TeamExtremes<'a> {
    pub team: &'a str,
    pub min: &'a Player,
    pub max: &'a Player,
}

/// Mean eDPI for one team.
#[derive(Debug, Clone, Copy)]
pub struct TeamStats<'a> {
    pub team: &'a str,
    pub players: usize,
    pub mean_edpi: f64,
}

/// Median eDPI for one team.
#[derive(Debug, Clone, Copy)]
pub struct TeamMedian<'a> {
    pub team: &'a str,
    pub players: usize,
    pub median_edpi: f64,
}

/// Whole-dataset summary.
#[derive(Debug, Clone, Copy)]
pub struct OverallStats<'a> {
    pub players: usize,
    pub lowest: &'a Player,
    pub highest: &'a Player,
    pub mean_edpi: f64,
    pub median_edpi: f64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Split a team-grouped view into maximal runs sharing the same team.
fn team_runs<'v, 'a>(view: &'v [&'a Player]) -> impl Iterator<Item = &'v [&'a Player]> {
    view.chunk_by(|a, b| a.team == b.team)
}

/// Running mean, so large finite eDPI values never overflow an intermediate sum.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut avg = None;
    for (i, value) in values.enumerate() {
        let current = avg.unwrap_or(0.0);
        avg = Some(current + (value - current) / (i + 1) as f64);
    }
    avg
}

/// Median of an ascending slice: the middle value for odd lengths, the average
/// of the two middle values for even lengths.
pub fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 0 {
        let (lo, hi) = (sorted[n / 2 - 1], sorted[n / 2]);
        Some(lo + (hi - lo) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

// ---------------------------------------------------------------------------
// Per-team reports
// ---------------------------------------------------------------------------

/// Min and max eDPI player for each team, teams in order of first appearance.
///
/// Comparisons are strict, so the first player seen wins a tie for either end.
pub fn min_max_by_team(store: &PlayerStore) -> Vec<TeamExtremes<'_>> {
    let view = store.by_team();
    let mut out = Vec::new();

    for run in team_runs(&view) {
        let first = run[0];
        let mut min = first;
        let mut max = first;
        for &player in &run[1..] {
            if player.edpi < min.edpi {
                min = player;
            }
            if player.edpi > max.edpi {
                max = player;
            }
        }
        out.push(TeamExtremes {
            team: &first.team,
            min,
            max,
        });
    }

    out
}

/// Mean eDPI per team, highest first. Teams with equal means keep their
/// order of first appearance.
pub fn mean_by_team(store: &PlayerStore) -> Vec<TeamStats<'_>> {
    let view = store.by_team();
    let mut out: Vec<TeamStats<'_>> = team_runs(&view)
        .filter_map(|run| {
            let mean_edpi = mean(run.iter().map(|p| p.edpi))?;
            Some(TeamStats {
                team: &run[0].team,
                players: run.len(),
                mean_edpi,
            })
        })
        .collect();

    out.sort_by(|a, b| b.mean_edpi.total_cmp(&a.mean_edpi));
    out
}

/// Median eDPI per team, highest first.
pub fn median_by_team(store: &PlayerStore) -> Vec<TeamMedian<'_>> {
    let view = store.by_team();
    let mut out: Vec<TeamMedian<'_>> = team_runs(&view)
        .filter_map(|run| {
            let mut values: Vec<f64> = run.iter().map(|p| p.edpi).collect();
            values.sort_by(f64::total_cmp);
            Some(TeamMedian {
                team: &run[0].team,
                players: run.len(),
                median_edpi: median_of_sorted(&values)?,
            })
        })
        .collect();

    out.sort_by(|a, b| b.median_edpi.total_cmp(&a.median_edpi));
    out
}

// ---------------------------------------------------------------------------
// Whole-dataset report
// ---------------------------------------------------------------------------

/// Lowest, highest, mean and median eDPI over every player.
///
/// Returns `None` for an empty store. Lowest and highest are the first and last
/// entries of the ascending-eDPI view, so ties resolve to store order.
pub fn overall_stats(store: &PlayerStore) -> Option<OverallStats<'_>> {
    let view = store.by_edpi();
    let (&lowest, &highest) = (view.first()?, view.last()?);

    let values: Vec<f64> = view.iter().map(|p| p.edpi).collect();
    Some(OverallStats {
        players: view.len(),
        lowest,
        highest,
        mean_edpi: mean(values.iter().copied())?,
        median_edpi: median_of_sorted(&values)?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn player(team: &str, name: &str, edpi: f64) -> Player {
        Player {
            team: team.into(),
            name: name.into(),
            dpi: "800".into(),
            sensitivity: None,
            edpi,
        }
    }

    fn store(players: Vec<Player>) -> PlayerStore {
        players.into_iter().collect()
    }

    fn example_store() -> PlayerStore {
        store(vec![
            player("TeamA", "P1", 400.0),
            player("TeamA", "P2", 200.0),
            player("TeamB", "P3", 800.0),
        ])
    }

    // -- median helper --

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median_of_sorted(&[]), None);
        assert_eq!(median_of_sorted(&[5.0]), Some(5.0));
        assert_eq!(median_of_sorted(&[1.0, 2.0, 9.0]), Some(2.0));
        assert_eq!(median_of_sorted(&[1.0, 2.0, 4.0, 9.0]), Some(3.0));
    }

    // -- min/max by team --

    #[test]
    fn min_max_example_scenario() {
        let store = example_store();
        let extremes = min_max_by_team(&store);
        assert_eq!(extremes.len(), 2);

        assert_eq!(extremes[0].team, "TeamA");
        assert_eq!(extremes[0].min.name, "P2");
        assert_eq!(extremes[0].max.name, "P1");

        assert_eq!(extremes[1].team, "TeamB");
        assert_eq!(extremes[1].min.name, "P3");
        assert_eq!(extremes[1].max.name, "P3");
    }

    #[test]
    fn min_max_bounds_every_team_member() {
        let store = store(vec![
            player("X", "a", 300.0),
            player("Y", "b", 150.0),
            player("X", "c", 120.0),
            player("X", "d", 512.0),
            player("Y", "e", 640.0),
            player("Z", "f", 280.0),
        ]);
        for ext in min_max_by_team(&store) {
            for p in store.players().iter().filter(|p| p.team == ext.team) {
                assert!(ext.min.edpi <= p.edpi && p.edpi <= ext.max.edpi);
            }
        }
    }

    #[test]
    fn min_max_first_occurrence_wins_ties() {
        let store = store(vec![
            player("T", "first", 200.0),
            player("T", "second", 200.0),
            player("T", "third", 200.0),
        ]);
        let ext = &min_max_by_team(&store)[0];
        assert_eq!(ext.min.name, "first");
        assert_eq!(ext.max.name, "first");
    }

    #[test]
    fn split_team_runs_are_merged() {
        let store = store(vec![
            player("A", "a1", 100.0),
            player("B", "b1", 500.0),
            player("A", "a2", 900.0),
        ]);
        let extremes = min_max_by_team(&store);
        assert_eq!(extremes.len(), 2);
        assert_eq!(extremes[0].team, "A");
        assert_eq!(extremes[0].min.name, "a1");
        assert_eq!(extremes[0].max.name, "a2");
    }

    // -- mean by team --

    #[test]
    fn mean_by_team_sorted_descending() {
        let store = store(vec![
            player("Low", "a", 100.0),
            player("Low", "b", 200.0),
            player("High", "c", 900.0),
            player("Mid", "d", 300.0),
            player("Mid", "e", 500.0),
        ]);
        let means = mean_by_team(&store);
        let teams: Vec<&str> = means.iter().map(|t| t.team).collect();
        assert_eq!(teams, vec!["High", "Mid", "Low"]);

        for window in means.windows(2) {
            assert!(window[0].mean_edpi >= window[1].mean_edpi);
        }

        for stat in &means {
            let values: Vec<f64> = store
                .players()
                .iter()
                .filter(|p| p.team == stat.team)
                .map(|p| p.edpi)
                .collect();
            let expected = values.iter().sum::<f64>() / values.len() as f64;
            assert!((stat.mean_edpi - expected).abs() < 1e-9);
            assert_eq!(stat.players, values.len());
        }
    }

    #[test]
    fn equal_means_keep_appearance_order() {
        let store = store(vec![
            player("First", "a", 300.0),
            player("Second", "b", 300.0),
            player("Top", "c", 301.0),
        ]);
        let teams: Vec<&str> = mean_by_team(&store).iter().map(|t| t.team).collect();
        assert_eq!(teams, vec!["Top", "First", "Second"]);
    }

    // -- median by team --

    #[test]
    fn median_by_team_handles_even_groups() {
        let store = store(vec![
            player("A", "a", 100.0),
            player("A", "b", 400.0),
            player("A", "c", 200.0),
            player("A", "d", 300.0),
            player("B", "e", 260.0),
        ]);
        let medians = median_by_team(&store);
        assert_eq!(medians[0].team, "B");
        assert!((medians[0].median_edpi - 260.0).abs() < 1e-9);
        assert_eq!(medians[1].team, "A");
        assert!((medians[1].median_edpi - 250.0).abs() < 1e-9);
        assert_eq!(medians[1].players, 4);
    }

    // -- overall --

    #[test]
    fn overall_example_scenario() {
        let store = example_store();
        let stats = overall_stats(&store).unwrap();
        assert_eq!(stats.players, 3);
        assert_eq!(stats.lowest.name, "P2");
        assert_eq!(stats.highest.name, "P3");
        assert!((stats.median_edpi - 400.0).abs() < 1e-9);
        assert!((stats.mean_edpi - 1400.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn overall_does_not_reorder_store() {
        let store = example_store();
        let _ = overall_stats(&store);
        let names: Vec<&str> = store.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn overall_single_player() {
        let store = store(vec![player("Solo", "only", 333.0)]);
        let stats = overall_stats(&store).unwrap();
        assert_eq!(stats.mean_edpi, 333.0);
        assert_eq!(stats.median_edpi, 333.0);
        assert_eq!(stats.lowest.name, "only");
        assert_eq!(stats.highest.name, "only");
    }

    #[test]
    fn huge_edpi_values_stay_finite() {
        let store = store(vec![player("A", "a1", 1e308), player("A", "a2", 1e308)]);
        let stats = overall_stats(&store).unwrap();
        assert_eq!(stats.mean_edpi, 1e308);
        assert_eq!(stats.median_edpi, 1e308);
        assert_eq!(mean_by_team(&store)[0].mean_edpi, 1e308);
        assert_eq!(median_by_team(&store)[0].median_edpi, 1e308);
    }

    #[test]
    fn empty_store_reports_nothing() {
        let store = PlayerStore::with_capacity_limit(10);
        assert!(overall_stats(&store).is_none());
        assert!(min_max_by_team(&store).is_empty());
        assert!(mean_by_team(&store).is_empty());
        assert!(median_by_team(&store).is_empty());
    }
}
