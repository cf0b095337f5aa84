// Fetch-then-extract pipeline that builds the player store for a run.

use tracing::warn;

use crate::config::ExtractionConfig;
use crate::extract::{extract_from_html, ExtractionSummary};
use crate::fetch::{FetchError, PageSource};
use crate::store::PlayerStore;

/// Fetch the page once and extract every player from it.
///
/// Only the fetch can fail. A page without a usable table produces an empty
/// store, which every report handles.
pub async fn load_players<S: PageSource + ?Sized>(
    source: &S,
    extraction: &ExtractionConfig,
) -> Result<(PlayerStore, ExtractionSummary), FetchError> {
    let html = source.fetch().await?;

    let mut store = PlayerStore::with_capacity_limit(extraction.max_players);
    let summary = extract_from_html(&html, &extraction.columns, &mut store);
    if store.is_empty() {
        warn!("No players found in the fetched page");
    }
    Ok((store, summary))
}
