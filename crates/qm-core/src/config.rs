//! Game configuration
//!
//! Carries the generation bounds and the RNG seed from the binary edge into
//! the core. Validation happens once, before any stage is built.

use serde::{Deserialize, Serialize};

use crate::consts::{ABS_MIN_ROOM_DIM, MAX_ROOM_DIM, MIN_ROOM_DIM};
use crate::errors::GameError;

/// Inclusive bounds for generated room dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBounds {
    pub min: u8,
    pub max: u8,
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self {
            min: MIN_ROOM_DIM,
            max: MAX_ROOM_DIM,
        }
    }
}

impl RoomBounds {
    pub fn new(min: u8, max: u8) -> Result<Self, GameError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Degenerate dimensions make unwalkable rooms; reject them up front.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min < ABS_MIN_ROOM_DIM || self.max < self.min {
            return Err(GameError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Top-level configuration assembled by the binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player name shown in the status line
    pub name: Option<String>,

    /// Difficulty level of the first stage
    pub level: u32,

    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Room dimension bounds
    pub bounds: RoomBounds,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        self.bounds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_valid() {
        assert!(RoomBounds::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert!(RoomBounds::new(2, 10).is_err());
        assert!(RoomBounds::new(8, 7).is_err());
        assert!(RoomBounds::new(0, 0).is_err());
    }

    #[test]
    fn accepts_minimal_bounds() {
        assert!(RoomBounds::new(3, 3).is_ok());
        assert!(RoomBounds::new(6, 20).is_ok());
    }
}
