//! Planet hover and click handling on top of Bevy mesh picking
//!
//! The picking backend re-casts the pointer every frame, so a planet that
//! drifts out from under a still cursor produces a `Pointer<Out>`. egui
//! windows report their own hits and block the meshes beneath them.

use bevy::picking::prelude::*;
use bevy::prelude::*;

use crate::camera::FocusRequest;
use crate::planets::PlanetBody;
use crate::ui::state::HoverState;

/// Track the planet under the pointer and the pointer position for the tooltip
pub fn track_planet_hover(
    mut outs: MessageReader<Pointer<Out>>,
    mut overs: MessageReader<Pointer<Over>>,
    mut moves: MessageReader<Pointer<Move>>,
    bodies: Query<&PlanetBody>,
    mut hover: ResMut<HoverState>,
) {
    // Leaving one planet and entering the next can land in the same frame.
    for ev in outs.read() {
        if let Ok(body) = bodies.get(ev.entity) {
            hover.leave(body.0);
        }
    }
    for ev in overs.read() {
        if let Ok(body) = bodies.get(ev.entity) {
            hover.enter(body.0, ev.pointer_location.position);
        }
    }
    for ev in moves.read() {
        if let Ok(body) = bodies.get(ev.entity) {
            hover.enter(body.0, ev.pointer_location.position);
        }
    }
}

/// Primary click on a planet requests a camera focus on it
pub fn click_planets(
    mut clicks: MessageReader<Pointer<Click>>,
    bodies: Query<&PlanetBody>,
    mut focus: MessageWriter<FocusRequest>,
) {
    for ev in clicks.read() {
        if ev.button != PointerButton::Primary {
            continue;
        }
        if let Ok(body) = bodies.get(ev.entity) {
            focus.write(FocusRequest { planet: body.0 });
        }
    }
}
