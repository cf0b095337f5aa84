// Player records extracted from the leaderboard table.

use std::fmt;

/// One leaderboard entry.
///
/// `dpi` and `sensitivity` stay as the page displays them (they sometimes carry
/// annotations); only `edpi` is numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub team: String,
    pub name: String,
    pub dpi: String,
    pub sensitivity: Option<String>,
    pub edpi: f64,
}

impl Player {
    /// True when the record carries everything the statistics need:
    /// non-empty team, name and DPI text, and a positive finite eDPI.
    pub fn is_complete(&self) -> bool {
        !self.team.is_empty()
            && !self.name.is_empty()
            && !self.dpi.is_empty()
            && self.edpi.is_finite()
            && self.edpi > 0.0
    }

    /// Case-insensitive exact comparison against the player's name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// A player field that a table column can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Team,
    Name,
    Dpi,
    Sensitivity,
    Edpi,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Team => write!(f, "team"),
            Field::Name => write!(f, "name"),
            Field::Dpi => write!(f, "dpi"),
            Field::Sensitivity => write!(f, "sensitivity"),
            Field::Edpi => write!(f, "edpi"),
        }
    }
}

/// Accumulates cell values for one table row before validation.
#[derive(Debug, Default)]
pub struct PlayerBuilder {
    team: String,
    name: String,
    dpi: String,
    sensitivity: Option<String>,
    edpi: f64,
}

impl PlayerBuilder {
    /// Assign already-normalized cell text to `field`. A later cell for the
    /// same field overwrites an earlier one.
    pub fn set(&mut self, field: Field, text: String) {
        match field {
            Field::Team => self.team = text,
            Field::Name => self.name = text,
            Field::Dpi => self.dpi = text,
            Field::Sensitivity => self.sensitivity = Some(text).filter(|s| !s.is_empty()),
            Field::Edpi => self.edpi = parse_edpi(&text),
        }
    }

    /// The finished record, or `None` for header and decorative rows.
    pub fn build(self) -> Option<Player> {
        let player = Player {
            team: self.team,
            name: self.name,
            dpi: self.dpi,
            sensitivity: self.sensitivity,
            edpi: self.edpi,
        };
        player.is_complete().then_some(player)
    }
}

/// Parse eDPI cell text. Anything that is not a finite decimal number becomes
/// 0.0, which the completeness check rejects.
pub fn parse_edpi(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// In-game sensitivity that yields `edpi` at the given mouse DPI.
pub fn sensitivity_at(edpi: f64, dpi: u32) -> f64 {
    edpi / f64::from(dpi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(team: &str, name: &str, dpi: &str, edpi: &str) -> PlayerBuilder {
        let mut b = PlayerBuilder::default();
        b.set(Field::Team, team.into());
        b.set(Field::Name, name.into());
        b.set(Field::Dpi, dpi.into());
        b.set(Field::Edpi, edpi.into());
        b
    }

    #[test]
    fn complete_row_builds_player() {
        let player = builder("Sentinels", "TenZ", "800", "256").build().unwrap();
        assert_eq!(player.team, "Sentinels");
        assert_eq!(player.name, "TenZ");
        assert_eq!(player.dpi, "800");
        assert_eq!(player.sensitivity, None);
        assert!((player.edpi - 256.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_text_field_rejects_row() {
        assert!(builder("", "TenZ", "800", "256").build().is_none());
        assert!(builder("Sentinels", "", "800", "256").build().is_none());
        assert!(builder("Sentinels", "TenZ", "", "256").build().is_none());
    }

    #[test]
    fn unparseable_or_zero_edpi_rejects_row() {
        assert!(builder("Sentinels", "TenZ", "800", "eDPI").build().is_none());
        assert!(builder("Sentinels", "TenZ", "800", "0").build().is_none());
        assert!(builder("Sentinels", "TenZ", "800", "-12").build().is_none());
        assert!(builder("Sentinels", "TenZ", "800", "inf").build().is_none());
        assert!(builder("Sentinels", "TenZ", "800", "NaN").build().is_none());
    }

    #[test]
    fn dpi_keeps_annotations_as_text() {
        let player = builder("FNATIC", "Boaster", "400 (wireless)", "140")
            .build()
            .unwrap();
        assert_eq!(player.dpi, "400 (wireless)");
    }

    #[test]
    fn empty_sensitivity_is_none() {
        let mut b = builder("FNATIC", "Boaster", "400", "140");
        b.set(Field::Sensitivity, String::new());
        assert_eq!(b.build().unwrap().sensitivity, None);

        let mut b = builder("FNATIC", "Boaster", "400", "140");
        b.set(Field::Sensitivity, "0.35".into());
        assert_eq!(b.build().unwrap().sensitivity.as_deref(), Some("0.35"));
    }

    #[test]
    fn name_match_ignores_case() {
        let player = builder("Sentinels", "ScreaM", "400", "200").build().unwrap();
        assert!(player.matches_name("scream"));
        assert!(player.matches_name("SCREAM"));
        assert!(!player.matches_name("scream "));
        assert!(!player.matches_name("screa"));
    }

    #[test]
    fn sensitivity_at_reference_dpis() {
        assert!((sensitivity_at(280.0, 400) - 0.7).abs() < 1e-12);
        assert!((sensitivity_at(280.0, 800) - 0.35).abs() < 1e-12);
        assert!((sensitivity_at(280.0, 1600) - 0.175).abs() < 1e-12);
    }
}
