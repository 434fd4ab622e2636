//! Error taxonomy for stage construction and room access

use thiserror::Error;

/// Errors surfaced by the generation core.
///
/// Random generation itself cannot fail; the only fatal condition is an
/// invalid configuration, plus fail-fast room index checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid room bounds: min {min} must be >= 3 and max {max} must be >= min")]
    InvalidBounds { min: u8, max: u8 },

    #[error("room index {index} out of range for a stage of {count} rooms")]
    RoomIndex { index: usize, count: usize },
}
