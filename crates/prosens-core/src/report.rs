// Plain-text rendering of reports and query results.

use std::fmt::Write;

use crate::player::{sensitivity_at, Player};
use crate::query::EdpiMatch;
use crate::stats::{self, OverallStats, TeamExtremes, TeamMedian, TeamStats};
use crate::store::PlayerStore;

pub const NO_DATA: &str = "No player data available.";

/// All startup reports in display order: per-team extremes, per-team mean,
/// per-team median, then the overall summary.
pub fn render_startup(store: &PlayerStore) -> String {
    let mut out = render_min_max(&stats::min_max_by_team(store));
    out.push_str(&render_team_means(&stats::mean_by_team(store)));
    out.push_str(&render_team_medians(&stats::median_by_team(store)));
    out.push_str(&render_overall(stats::overall_stats(store).as_ref()));
    out
}

pub fn render_min_max(extremes: &[TeamExtremes<'_>]) -> String {
    let mut out = String::from("\nMinimum and Maximum eDPI by Team:\n");
    if extremes.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
    }
    for ext in extremes {
        let _ = writeln!(out, "Team: {}", ext.team);
        let _ = writeln!(out, "Min: {} (eDPI: {:.2})", ext.min.name, ext.min.edpi);
        let _ = writeln!(out, "Max: {} (eDPI: {:.2})", ext.max.name, ext.max.edpi);
    }
    out
}

pub fn render_team_means(means: &[TeamStats<'_>]) -> String {
    let mut out = String::from("\nMean eDPI by Team (Highest to Lowest):\n");
    if means.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
    }
    for stat in means {
        let _ = writeln!(out, "Team: {} - {:.2}", stat.team, stat.mean_edpi);
    }
    out
}

pub fn render_team_medians(medians: &[TeamMedian<'_>]) -> String {
    let mut out = String::from("\nMedian eDPI by Team (Highest to Lowest):\n");
    if medians.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
    }
    for stat in medians {
        let _ = writeln!(out, "Team: {} - {:.2}", stat.team, stat.median_edpi);
    }
    out
}

pub fn render_overall(stats: Option<&OverallStats<'_>>) -> String {
    let mut out = String::from("\nOverall Statistics:\n");
    let Some(stats) = stats else {
        let _ = writeln!(out, "{NO_DATA}");
        return out;
    };
    let _ = writeln!(
        out,
        "Lowest eDPI: {} (Team: {}, eDPI: {:.2})",
        stats.lowest.name, stats.lowest.team, stats.lowest.edpi
    );
    let _ = writeln!(
        out,
        "Highest eDPI: {} (Team: {}, eDPI: {:.2})",
        stats.highest.name, stats.highest.team, stats.highest.edpi
    );
    let _ = writeln!(out, "Mean eDPI: {:.2}", stats.mean_edpi);
    let _ = writeln!(out, "Median eDPI: {:.2}", stats.median_edpi);
    out
}

/// Full player card, including the in-game sensitivity that reproduces the
/// player's eDPI at each of `reference_dpis`.
pub fn render_player(player: &Player, reference_dpis: &[u32]) -> String {
    let mut out = String::from("\nPlayer Information:\n");
    let _ = writeln!(out, "Name: {}", player.name);
    let _ = writeln!(out, "Team: {}", player.team);
    let _ = writeln!(out, "DPI: {}", player.dpi);
    if let Some(sens) = &player.sensitivity {
        let _ = writeln!(out, "Sensitivity: {sens}");
    }
    let _ = writeln!(out, "eDPI: {:.2}", player.edpi);

    if !reference_dpis.is_empty() {
        let _ = writeln!(out, "\nSensitivity at Different DPIs:");
        for &dpi in reference_dpis {
            let _ = writeln!(out, "{dpi} DPI: {:.3}", sensitivity_at(player.edpi, dpi));
        }
    }
    out
}

pub fn render_random(player: Option<&Player>, reference_dpis: &[u32]) -> String {
    match player {
        Some(p) => render_player(p, reference_dpis),
        None => format!("{NO_DATA}\n"),
    }
}

pub fn render_nearest(target: f64, matches: &[EdpiMatch<'_>]) -> String {
    let mut out = format!("\nPlayers closest to eDPI {target:.2}:\n");
    if matches.is_empty() {
        let _ = writeln!(out, "{NO_DATA}");
    }
    for m in matches {
        let _ = writeln!(
            out,
            "{} (Team: {}, eDPI: {:.2})",
            m.player.name, m.player.team, m.player.edpi
        );
    }
    out
}

/// Result of a name lookup: the player card on a hit, otherwise a not-found
/// line followed by any prefix suggestions.
pub fn render_lookup(
    found: Option<&Player>,
    suggestions: &[&Player],
    reference_dpis: &[u32],
) -> String {
    if let Some(player) = found {
        return render_player(player, reference_dpis);
    }
    let mut out = String::from("Player not found.\n");
    if !suggestions.is_empty() {
        let _ = writeln!(out, "Did you mean:");
        for p in suggestions {
            let _ = writeln!(out, "  {} ({})", p.name, p.team);
        }
    }
    out
}
