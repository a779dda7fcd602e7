//! Game configuration and its validation

use std::fmt;

use crate::rng::PieceSource;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION};

/// Rejected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    WidthOutOfRange(u16),
    HeightOutOfRange(u16),
    EmptyPieceCycle,
    GridSizeMismatch,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::WidthOutOfRange(_) => "width_out_of_range",
            ConfigError::HeightOutOfRange(_) => "height_out_of_range",
            ConfigError::EmptyPieceCycle => "empty_piece_cycle",
            ConfigError::GridSizeMismatch => "grid_size_mismatch",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::WidthOutOfRange(_) => "width must be between 4 and 256",
            ConfigError::HeightOutOfRange(_) => "height must be between 4 and 256",
            ConfigError::EmptyPieceCycle => "piece cycle must name at least one kind",
            ConfigError::GridSizeMismatch => "grid dimensions differ from the configuration",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::WidthOutOfRange(v) | ConfigError::HeightOutOfRange(v) => {
                write!(f, "{} (got {})", self.message(), v)
            }
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters fixed for the lifetime of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub source: PieceSource,
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: PieceSource) -> Self {
        self.source = source;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.width) {
            return Err(ConfigError::WidthOutOfRange(self.width));
        }
        if !range.contains(&self.height) {
            return Err(ConfigError::HeightOutOfRange(self.height));
        }
        if matches!(&self.source, PieceSource::Cycle(kinds) if kinds.is_empty()) {
            return Err(ConfigError::EmptyPieceCycle);
        }
        Ok(())
    }

    /// Top-center anchor where new pieces appear
    ///
    /// Pulled left on narrow fields so the whole 4-wide shape box fits.
    pub fn spawn_anchor(&self) -> (i16, i16) {
        let centered = (self.width / 2) as i16 - 1;
        let box_fits = self.width as i16 - 4;
        (centered.min(box_fits).max(0), 0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            source: PieceSource::SevenBag { seed: DEFAULT_SEED },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.spawn_anchor(), (4, 0));
    }

    #[test]
    fn test_dimension_limits() {
        assert_eq!(
            GameConfig::new(3, 20).validate(),
            Err(ConfigError::WidthOutOfRange(3))
        );
        assert_eq!(
            GameConfig::new(10, 257).validate(),
            Err(ConfigError::HeightOutOfRange(257))
        );
        assert_eq!(GameConfig::new(4, 4).validate(), Ok(()));
        assert_eq!(GameConfig::new(256, 256).validate(), Ok(()));
    }

    #[test]
    fn test_empty_cycle_rejected() {
        let config = GameConfig::default().with_source(PieceSource::Cycle(Vec::new()));
        assert_eq!(config.validate(), Err(ConfigError::EmptyPieceCycle));

        let config = GameConfig::default().with_source(PieceSource::Cycle(vec![ShapeKind::S]));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_spawn_anchor_is_top_center() {
        assert_eq!(GameConfig::new(4, 10).spawn_anchor(), (0, 0));
        assert_eq!(GameConfig::new(5, 10).spawn_anchor(), (1, 0));
        assert_eq!(GameConfig::new(11, 10).spawn_anchor(), (4, 0));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::WidthOutOfRange(2).to_string(),
            "width must be between 4 and 256 (got 2)"
        );
    }
}
