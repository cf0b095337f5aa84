// Interactive lookups over the player store.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::player::Player;
use crate::store::PlayerStore;

/// A player ranked by distance from a target eDPI.
#[derive(Debug, Clone, Copy)]
pub struct EdpiMatch<'a> {
    pub player: &'a Player,
    pub diff: f64,
}

/// The `k` players whose eDPI is closest to `target`, closest first.
///
/// `k` is clamped to the store size. Players at equal distance keep store
/// order, so the ranking is deterministic.
pub fn nearest_by_edpi(store: &PlayerStore, target: f64, k: usize) -> Vec<EdpiMatch<'_>> {
    let mut ranked: Vec<EdpiMatch<'_>> = store
        .players()
        .iter()
        .map(|player| EdpiMatch {
            player,
            diff: (player.edpi - target).abs(),
        })
        .collect();
    ranked.sort_by(|a, b| a.diff.total_cmp(&b.diff));
    ranked.truncate(k);
    ranked
}

/// First player in store order whose name equals `name`, ignoring case.
pub fn find_by_name<'a>(store: &'a PlayerStore, name: &str) -> Option<&'a Player> {
    store.players().iter().find(|p| p.matches_name(name))
}

/// Up to `limit` players whose name starts with `prefix`, ignoring case.
/// Used to suggest alternatives when an exact lookup misses.
pub fn search_by_prefix<'a>(store: &'a PlayerStore, prefix: &str, limit: usize) -> Vec<&'a Player> {
    let prefix = prefix.to_lowercase();
    if prefix.is_empty() {
        return Vec::new();
    }
    store
        .players()
        .iter()
        .filter(|p| p.name.to_lowercase().starts_with(&prefix))
        .take(limit)
        .collect()
}

/// A uniformly random player, or `None` when the store is empty.
pub fn random_player<'a, R: Rng + ?Sized>(store: &'a PlayerStore, rng: &mut R) -> Option<&'a Player> {
    store.players().choose(rng)
}
