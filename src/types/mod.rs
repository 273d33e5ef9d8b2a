//! Type-safe wrappers and enums shared by the scoring and tiebreak engines.

pub mod ids;
pub mod position;
pub mod round;

pub use ids::{ParticipantId, PlayerId};
pub use position::Position;
pub use round::Round;
