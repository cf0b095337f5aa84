// Table extraction: walk a parsed page, find every <table>, and turn its body
// rows into players.
//
// Columns are positional (see `ColumnMap`); header cells are never consulted.
// Rows that do not produce a complete player are dropped silently since most of
// them are headers, spacers, or ads.

use std::ops::ControlFlow;

use scraper::{ElementRef, Html};
use tracing::{debug, info, warn};

use crate::config::ColumnMap;
use crate::normalize::normalize_cell;
use crate::player::PlayerBuilder;
use crate::store::{PlayerStore, StoreError};

// ---------------------------------------------------------------------------
// Markup abstraction
// ---------------------------------------------------------------------------

/// The slice of a DOM node the extractor needs.
pub trait MarkupNode: Sized {
    fn is_element(&self) -> bool;
    /// Tag name for elements, `None` otherwise.
    fn tag(&self) -> Option<&str>;
    /// Direct children in document order.
    fn child_nodes(&self) -> Vec<Self>;
    /// Concatenated text of this node and all descendants.
    fn text_content(&self) -> String;

    fn has_tag(&self, name: &str) -> bool {
        self.is_element() && self.tag().is_some_and(|t| t.eq_ignore_ascii_case(name))
    }
}

/// Elements of a `scraper` document. Text, comment and doctype nodes cannot
/// contain tables, so they are skipped at the child boundary.
impl<'a> MarkupNode for ElementRef<'a> {
    fn is_element(&self) -> bool {
        true
    }

    fn tag(&self) -> Option<&str> {
        Some(self.value().name())
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Counters describing one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub tables: usize,
    pub rows: usize,
    pub accepted: usize,
    /// Set when the store filled up and remaining rows were dropped.
    pub truncated: bool,
}

struct Extractor<'s> {
    columns: &'s ColumnMap,
    store: &'s mut PlayerStore,
    summary: ExtractionSummary,
}

/// Parse `html` leniently and extract players from every table in it.
/// Markup that contains no usable table simply yields nothing.
pub fn extract_from_html(
    html: &str,
    columns: &ColumnMap,
    store: &mut PlayerStore,
) -> ExtractionSummary {
    let document = Html::parse_document(html);
    extract_players(&document.root_element(), columns, store)
}

/// Depth-first walk from `root`, appending complete rows to `store`.
///
/// Tables nested inside other tables are visited too. The walk stops early
/// (with a warning) when the store reaches its limit.
pub fn extract_players<N: MarkupNode>(
    root: &N,
    columns: &ColumnMap,
    store: &mut PlayerStore,
) -> ExtractionSummary {
    let mut extractor = Extractor {
        columns,
        store,
        summary: ExtractionSummary::default(),
    };
    let _ = extractor.visit(root);

    let summary = extractor.summary;
    info!(
        "Extracted {} players from {} rows in {} tables",
        summary.accepted, summary.rows, summary.tables
    );
    summary
}

impl Extractor<'_> {
    fn visit<N: MarkupNode>(&mut self, node: &N) -> ControlFlow<()> {
        if node.has_tag("table") {
            self.summary.tables += 1;
            self.table(node)?;
        }
        for child in node.child_nodes() {
            self.visit(&child)?;
        }
        ControlFlow::Continue(())
    }

    fn table<N: MarkupNode>(&mut self, table: &N) -> ControlFlow<()> {
        let before = self.summary.accepted;
        for body in table.child_nodes().iter().filter(|n| n.has_tag("tbody")) {
            for row in body.child_nodes().iter().filter(|n| n.has_tag("tr")) {
                self.row(row)?;
            }
        }
        debug!(
            "Table #{} contributed {} players",
            self.summary.tables,
            self.summary.accepted - before
        );
        ControlFlow::Continue(())
    }

    fn row<N: MarkupNode>(&mut self, row: &N) -> ControlFlow<()> {
        self.summary.rows += 1;

        let mut builder = PlayerBuilder::default();
        let cells = row.child_nodes();
        for (index, cell) in cells.iter().filter(|n| n.has_tag("td")).enumerate() {
            if let Some(field) = self.columns.field_at(index) {
                builder.set(field, normalize_cell(&cell.text_content()));
            }
        }

        let Some(player) = builder.build() else {
            return ControlFlow::Continue(());
        };

        match self.store.push(player) {
            Ok(()) => {
                self.summary.accepted += 1;
                ControlFlow::Continue(())
            }
            Err(StoreError::CapacityReached { limit }) => {
                warn!("Maximum player limit reached ({limit}); remaining rows are dropped");
                self.summary.truncated = true;
                ControlFlow::Break(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
