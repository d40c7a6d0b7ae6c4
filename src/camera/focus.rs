//! Camera focus transitions
//!
//! Selecting a planet eases the camera from wherever it is to a point behind
//! and above the planet. The animator is an explicit two-state machine
//! (idle / transitioning) stepped once per frame by [`drive_focus_transitions`].
//! While transitioning the camera keeps looking at the planet's live position,
//! so a moving planet stays centered.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::config::{AppConfig, FocusConfig, FocusPolicy};
use crate::planets::{PlanetId, PlanetRegistry};

/// Request to fly the camera to a planet
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub planet: PlanetId,
}

/// Cubic ease-out: fast start, decelerating into the target
pub fn ease_out_cubic(progress: f32) -> f32 {
    let inv = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Camera destination for a planet: raised above it and pulled back along +Z
/// in proportion to its orbital distance
pub fn focus_target(planet_position: Vec3, distance: f32, cfg: &FocusConfig) -> Vec3 {
    planet_position + Vec3::new(0.0, cfg.height_offset, distance * cfg.distance_factor)
}

/// One running camera flight
#[derive(Clone, Debug, PartialEq)]
pub struct FocusTransition {
    pub planet: PlanetId,
    pub start: Vec3,
    pub target: Vec3,
    pub started_at: f64,
    pub duration_secs: f32,
}

impl FocusTransition {
    /// Linear progress in [0, 1] at wall-clock time `now`
    pub fn progress(&self, now: f64) -> f32 {
        let elapsed = (now - self.started_at).max(0.0) as f32;
        (elapsed / self.duration_secs).min(1.0)
    }

    /// Eased camera position at `now`
    pub fn position_at(&self, now: f64) -> Vec3 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.target;
        }
        self.start.lerp(self.target, ease_out_cubic(progress))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Transitioning,
}

/// Camera pose produced by one animator step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusFrame {
    pub position: Vec3,
    /// Planet whose live position the camera should aim at
    pub look_at: PlanetId,
}

#[derive(Resource, Debug, Default)]
pub struct FocusAnimator {
    pub policy: FocusPolicy,
    transitions: Vec<FocusTransition>,
}

impl FocusAnimator {
    pub fn new(policy: FocusPolicy) -> Self {
        Self {
            policy,
            transitions: Vec::new(),
        }
    }

    pub fn state(&self) -> AnimatorState {
        if self.transitions.is_empty() {
            AnimatorState::Idle
        } else {
            AnimatorState::Transitioning
        }
    }

    pub fn active(&self) -> &[FocusTransition] {
        &self.transitions
    }

    pub fn begin(&mut self, transition: FocusTransition) {
        if self.policy == FocusPolicy::Restart {
            self.transitions.clear();
        }
        self.transitions.push(transition);
    }

    /// Advance every active transition to `now`. Transitions are applied in
    /// start order so the newest one owns the frame; any that reach progress
    /// 1.0 are retired after contributing their final (exact target) pose.
    pub fn step(&mut self, now: f64) -> Option<FocusFrame> {
        let frame = self.transitions.last().map(|t| FocusFrame {
            position: t.position_at(now),
            look_at: t.planet,
        });
        self.transitions.retain(|t| t.progress(now) < 1.0);
        frame
    }
}

/// Turn focus requests into transitions starting from the current camera position
pub fn begin_focus_transitions(
    mut requests: MessageReader<FocusRequest>,
    time: Res<Time<Real>>,
    config: Res<AppConfig>,
    registry: Res<PlanetRegistry>,
    mut animator: ResMut<FocusAnimator>,
    cameras: Query<&Transform, With<MainCamera>>,
) {
    let Ok(camera) = cameras.single() else {
        requests.clear();
        return;
    };

    for request in requests.read() {
        let Some(planet) = registry.get(request.planet) else {
            continue;
        };
        info!("Focusing camera on {}", planet.name);
        animator.begin(FocusTransition {
            planet: planet.id,
            start: camera.translation,
            target: focus_target(planet.position, planet.distance, &config.focus),
            started_at: time.elapsed_secs_f64(),
            duration_secs: config.focus.duration_secs,
        });
    }
}

/// Step the animator and write the camera pose
pub fn drive_focus_transitions(
    time: Res<Time<Real>>,
    registry: Res<PlanetRegistry>,
    mut animator: ResMut<FocusAnimator>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    if animator.state() == AnimatorState::Idle {
        return;
    }
    let Some(frame) = animator.step(time.elapsed_secs_f64()) else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    camera.translation = frame.position;
    if let Some(planet) = registry.get(frame.look_at) {
        camera.look_at(planet.position, Vec3::Y);
    }
    if animator.state() == AnimatorState::Idle {
        debug!("Camera focus transition finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planets::data::PLANET_TABLE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    const EPSILON: f32 = 1e-4;

    fn transition(planet: usize, start: Vec3, target: Vec3, started_at: f64) -> FocusTransition {
        FocusTransition {
            planet: PlanetId(planet),
            start,
            target,
            started_at,
            duration_secs: 2.0,
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPSILON);
        // Decelerates: the first half covers more ground than the second.
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(1.5), 1.0);
    }

    #[test]
    fn test_focus_target_offset() {
        let cfg = FocusConfig::default();
        let target = focus_target(Vec3::new(25.0, 0.0, 0.0), 25.0, &cfg);
        assert!((target - Vec3::new(25.0, 10.0, 7.5)).length() < EPSILON);
    }

    #[test]
    fn test_transition_reaches_target_and_stops() {
        let mut animator = FocusAnimator::new(FocusPolicy::Restart);
        let start = Vec3::new(0.0, 30.0, 80.0);
        let target = Vec3::new(15.0, 10.0, 4.5);
        animator.begin(transition(0, start, target, 10.0));
        assert_eq!(animator.state(), AnimatorState::Transitioning);

        let mid = animator.step(11.0).expect("frame at midpoint");
        let expected_mid = start.lerp(target, 0.875);
        assert!((mid.position - expected_mid).length() < EPSILON);
        assert_eq!(animator.state(), AnimatorState::Transitioning);

        let end = animator.step(12.0).expect("final frame");
        assert!((end.position - target).length() < EPSILON);
        assert_eq!(end.look_at, PlanetId(0));
        assert_eq!(animator.state(), AnimatorState::Idle);

        assert!(animator.step(12.5).is_none());
    }

    #[test]
    fn test_late_frame_lands_exactly_on_target() {
        let mut animator = FocusAnimator::new(FocusPolicy::Restart);
        let target = Vec3::new(-40.0, 10.0, 12.0);
        animator.begin(transition(4, Vec3::new(0.0, 30.0, 80.0), target, 0.0));

        let frame = animator.step(5.0).expect("frame");
        assert_eq!(frame.position, target);
        assert_eq!(animator.state(), AnimatorState::Idle);
    }

    #[test]
    fn test_restart_policy_replaces_active_transition() {
        let mut animator = FocusAnimator::new(FocusPolicy::Restart);
        animator.begin(transition(0, Vec3::ZERO, Vec3::X, 0.0));
        animator.begin(transition(1, Vec3::ZERO, Vec3::Y, 0.5));
        assert_eq!(animator.active().len(), 1);
        assert_eq!(animator.active()[0].planet, PlanetId(1));
    }

    #[test]
    fn test_overlap_policy_keeps_both_and_newest_wins() {
        let mut animator = FocusAnimator::new(FocusPolicy::Overlap);
        animator.begin(transition(0, Vec3::ZERO, Vec3::X * 10.0, 0.0));
        animator.begin(transition(1, Vec3::ZERO, Vec3::Y * 10.0, 1.0));
        assert_eq!(animator.active().len(), 2);

        let frame = animator.step(2.0).expect("frame");
        assert_eq!(frame.look_at, PlanetId(1));
        // The first flight finished at t=2.0 and is retired; the second is still running.
        assert_eq!(animator.active().len(), 1);

        let frame = animator.step(3.0).expect("frame");
        assert!((frame.position - Vec3::Y * 10.0).length() < EPSILON);
        assert_eq!(animator.state(), AnimatorState::Idle);
    }

    fn focus_app() -> App {
        let mut app = App::new();
        let registry = PlanetRegistry::from_table(PLANET_TABLE, &mut StdRng::seed_from_u64(5));
        app.insert_resource(AppConfig::default())
            .insert_resource(registry)
            .insert_resource(FocusAnimator::default())
            .insert_resource(Time::<Real>::default())
            .add_message::<FocusRequest>()
            .add_systems(
                Update,
                (begin_focus_transitions, drive_focus_transitions).chain(),
            );
        // The first clock update only records the starting instant.
        app.world_mut()
            .resource_mut::<Time<Real>>()
            .update_with_duration(Duration::ZERO);
        app.world_mut().spawn((
            MainCamera,
            Transform::from_xyz(0.0, 30.0, 80.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
        app
    }

    fn camera_translation(app: &mut App) -> Vec3 {
        let mut q = app.world_mut().query_filtered::<&Transform, With<MainCamera>>();
        q.single(app.world()).expect("camera").translation
    }

    #[test]
    fn test_click_flight_over_real_time() {
        let mut app = focus_app();
        let planet = app.world().resource::<PlanetRegistry>().planets[2].clone();
        let target = focus_target(planet.position, planet.distance, &FocusConfig::default());

        app.world_mut().write_message(FocusRequest { planet: planet.id });
        app.update();
        assert_eq!(
            app.world().resource::<FocusAnimator>().state(),
            AnimatorState::Transitioning
        );
        // Zero time has passed: the camera is still at its start.
        assert!((camera_translation(&mut app) - Vec3::new(0.0, 30.0, 80.0)).length() < EPSILON);

        app.world_mut()
            .resource_mut::<Time<Real>>()
            .update_with_duration(Duration::from_millis(2000));
        app.update();

        assert!((camera_translation(&mut app) - target).length() < EPSILON);
        assert_eq!(app.world().resource::<FocusAnimator>().state(), AnimatorState::Idle);

        // Idle animator leaves the camera alone.
        let mut q = app.world_mut().query_filtered::<&mut Transform, With<MainCamera>>();
        q.single_mut(app.world_mut()).expect("camera").translation = Vec3::new(1.0, 2.0, 3.0);
        app.update();
        assert_eq!(camera_translation(&mut app), Vec3::new(1.0, 2.0, 3.0));
    }
}
