// Built-in configuration (source page, column layout, query defaults).
//
// The settings ship inside the binary as `defaults/prosettings.toml`; there is
// no runtime config file. `from_toml_str` exists so alternate layouts can be
// validated in tests and swapped in at build time.

use serde::Deserialize;
use thiserror::Error;

use crate::player::Field;

const BUILTIN_TOML: &str = include_str!("../defaults/prosettings.toml");

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse built-in configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub extraction: ExtractionConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Upper bound on stored players. Rows past this limit are dropped.
    pub max_players: usize,
    pub columns: ColumnMap,
}

/// Positional mapping from table cells to player fields.
///
/// Written field-first in TOML (`team = 1`) and looked up index-first via
/// [`ColumnMap::field_at`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ColumnMap {
    pub team: usize,
    pub name: usize,
    pub dpi: usize,
    #[serde(default)]
    pub sensitivity: Option<usize>,
    pub edpi: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// How many players the nearest-eDPI ranking returns.
    pub nearest_count: usize,
    /// DPI levels the player report converts eDPI into an in-game sensitivity for.
    pub reference_dpis: Vec<u32>,
}

// ---------------------------------------------------------------------------
// Column lookup
// ---------------------------------------------------------------------------

impl ColumnMap {
    /// All configured `(column, field)` pairs.
    pub fn entries(&self) -> Vec<(usize, Field)> {
        let mut entries = vec![
            (self.team, Field::Team),
            (self.name, Field::Name),
            (self.dpi, Field::Dpi),
            (self.edpi, Field::Edpi),
        ];
        if let Some(sens) = self.sensitivity {
            entries.push((sens, Field::Sensitivity));
        }
        entries
    }

    /// The field a zero-based cell index maps to, if any.
    pub fn field_at(&self, index: usize) -> Option<Field> {
        self.entries()
            .into_iter()
            .find(|(column, _)| *column == index)
            .map(|(_, field)| field)
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

impl Config {
    /// The configuration compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_TOML)
    }

    /// Parse and validate a configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        validate(&config)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validation(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        message: message.into(),
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.source.url.trim().is_empty() {
        return Err(validation("source.url", "must not be empty"));
    }

    if config.source.timeout_secs == 0 {
        return Err(validation("source.timeout_secs", "must be greater than 0"));
    }

    if config.extraction.max_players == 0 {
        return Err(validation("extraction.max_players", "must be greater than 0"));
    }

    let mut seen: Vec<(usize, Field)> = Vec::new();
    for (column, field) in config.extraction.columns.entries() {
        if let Some((_, other)) = seen.iter().find(|(c, _)| *c == column) {
            return Err(validation(
                "extraction.columns",
                format!("column {column} is mapped to both `{other}` and `{field}`"),
            ));
        }
        seen.push((column, field));
    }

    if config.query.nearest_count == 0 {
        return Err(validation("query.nearest_count", "must be greater than 0"));
    }

    if let Some(dpi) = config.query.reference_dpis.iter().find(|&&d| d == 0) {
        return Err(validation(
            "query.reference_dpis",
            format!("must all be > 0, got {dpi}"),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
