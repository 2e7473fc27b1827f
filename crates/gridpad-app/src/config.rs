use gridpad_core::{Board, GeometryError};

/// Puzzle artwork shown behind the default board.
pub const DEFAULT_BACKGROUND: &str =
    "https://logic-masters.de/Dateien/bild.php?data=b02f41dc-8359-3030303449312d31";

/// Cell edge length in points.
pub const DEFAULT_CELL_SIZE: f32 = 64.0;

const WINDOW_MARGIN: f32 = 48.0;
const STATUS_LINE_HEIGHT: f32 = 32.0;

/// Construction parameters for a [`GridpadApp`](crate::GridpadApp).
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub width: u16,
    pub height: u16,
    /// Image URI painted behind the cells. Display only.
    pub background: String,
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            background: DEFAULT_BACKGROUND.to_owned(),
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    #[display("invalid board geometry: {_0}")]
    #[from]
    Geometry(GeometryError),
    #[display("cell size must be a positive finite number, got {cell_size}")]
    InvalidCellSize { cell_size: f32 },
}

impl GridConfig {
    /// Validates the configuration and returns its board.
    pub fn board(&self) -> Result<Board, ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize {
                cell_size: self.cell_size,
            });
        }
        Ok(Board::new(self.width, self.height)?)
    }

    /// Returns a native window size that fits the grid and the status line.
    #[must_use]
    pub fn window_size(&self) -> (f32, f32) {
        (
            f32::from(self.width) * self.cell_size + WINDOW_MARGIN,
            f32::from(self.height) * self.cell_size + WINDOW_MARGIN + STATUS_LINE_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_nine_by_nine() {
        let config = GridConfig::default();
        let board = config.board().unwrap();
        assert_eq!((board.width(), board.height()), (9, 9));
        assert_eq!(config.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let config = GridConfig {
            width: 0,
            ..GridConfig::default()
        };
        assert_eq!(
            config.board(),
            Err(ConfigError::Geometry(GeometryError::ZeroWidth))
        );
        assert_eq!(
            config.board().unwrap_err().to_string(),
            "invalid board geometry: board width must be positive"
        );
    }

    #[test]
    fn rejects_bad_cell_size() {
        for cell_size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = GridConfig {
                cell_size,
                ..GridConfig::default()
            };
            assert!(
                matches!(config.board(), Err(ConfigError::InvalidCellSize { .. })),
                "{cell_size}"
            );
        }
    }

    #[test]
    fn window_fits_grid() {
        let config = GridConfig {
            width: 4,
            height: 2,
            cell_size: 10.0,
            ..GridConfig::default()
        };
        let (w, h) = config.window_size();
        assert!(w >= 40.0);
        assert!(h >= 20.0);
    }
}
