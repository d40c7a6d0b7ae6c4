//! Shared color helpers and frame ordering.

pub mod color;

use bevy::prelude::*;

/// Per-frame ordering of the `Update` schedule: pointer input first, then the
/// orbit/spin advancement, then everything that writes the camera.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulate,
    Camera,
}
