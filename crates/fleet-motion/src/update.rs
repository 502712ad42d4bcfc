//! The per-vehicle tick result.

use fleet_core::VehicleId;

use crate::{MotionState, PositionHistory};

/// One vehicle's outcome for one tick: the advanced motion state plus the
/// trimmed trail, handed to the persistence collaborator and to observers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleUpdate {
    pub vehicle: VehicleId,
    pub state: MotionState,
    pub history: PositionHistory,
}
