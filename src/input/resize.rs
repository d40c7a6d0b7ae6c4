//! Keep the camera projection in step with the window

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::camera::MainCamera;

/// Width / height, or None for a minimized (zero height) window
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    (height > 0.0).then(|| width / height)
}

pub fn sync_aspect_on_resize(
    mut resized: MessageReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };
    let Some(aspect) = aspect_ratio(last.width, last.height) else {
        return;
    };

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.aspect_ratio = aspect;
        }
    }
    debug!("Window resized to {}x{}", last.width, last.height);
}
