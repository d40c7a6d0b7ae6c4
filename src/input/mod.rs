//! Input module
//!
//! Planet hover and click through Bevy mesh picking, window resize and
//! keyboard shortcuts. Wheel zoom lives with the camera.

use bevy::picking::prelude::*;
use bevy::prelude::*;

pub mod keyboard;
pub mod picking;
pub mod resize;

use crate::core::FrameSet;

/// Plugin for pointer, window and keyboard input
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MeshPickingPlugin).add_systems(
            Update,
            (
                picking::track_planet_hover,
                picking::click_planets,
                resize::sync_aspect_on_resize,
                keyboard::keyboard_shortcuts,
            )
                .in_set(FrameSet::Input),
        );
    }
}
