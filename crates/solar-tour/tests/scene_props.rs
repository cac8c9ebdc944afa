//! Property tests over generated bodies, window sizes and visibility
//! sequences.

mod common;

use common::*;
use glam::Vec3;
use proptest::prelude::*;
use solar_tour::bodies::{MoonConfig, RingConfig};
use solar_tour::lifecycle::ViewportBinder;
use solar_tour::systems::{builder, motion};
use solar_tour::{
    BodyConfig, BodyId, Color, PerspectiveCamera, RenderLoopState, TourConfig, Visibility,
    WindowSize,
};

fn moon(index: usize, orbit_radius: f32, orbit_speed: f32) -> MoonConfig {
    MoonConfig {
        name: format!("moon{index}"),
        radius: 0.3,
        texture: format!("/moon{index}.jpg"),
        fallback_color: Color::WHITE,
        orbit_radius,
        orbit_speed,
        spin: 0.01,
        label: None,
    }
}

fn body_strategy() -> impl Strategy<Value = BodyConfig> {
    (
        any::<bool>(),
        prop::collection::vec((1.0f32..20.0, -0.05f32..0.05), 0..4),
        0.0f32..0.02,
    )
        .prop_map(|(ringed, moons, spin)| {
            let mut body = BodyConfig::for_body(BodyId::Neptune).clone();
            body.spin = spin;
            body.ring = ringed.then(|| RingConfig {
                inner: 4.0,
                outer: 5.0,
                segments: 32,
                texture: "/ring.jpg".to_string(),
            });
            body.moons = moons
                .into_iter()
                .enumerate()
                .map(|(i, (radius, speed))| moon(i, radius, speed))
                .collect();
            body
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// One primary, the optional ring and every moon; nothing visible yet.
    #[test]
    fn prop_build_mesh_count(body in body_strategy(), width in 320.0f32..2560.0) {
        let tour = TourConfig::default();
        let scene = builder::build(&body, &tour, width);

        let expected = 1 + usize::from(body.ring.is_some()) + body.moons.len();
        prop_assert_eq!(scene.mesh_count(), expected);
        for mesh in scene.meshes() {
            prop_assert_eq!(mesh.transform.scale, Vec3::ZERO);
        }
        for (node, config) in scene.moons.iter().zip(&body.moons) {
            let start = node.mesh.transform.translation;
            prop_assert!((start - Vec3::new(config.orbit_radius, 0.0, 0.0)).length() < 1e-5);
        }

        let tweens = builder::entrance(&scene, &tour);
        prop_assert_eq!(tweens.len(), expected);
    }

    /// Moons stay on their orbit however long the scene runs.
    #[test]
    fn prop_moons_keep_orbit_radius(body in body_strategy(), steps in 1usize..500) {
        let mut scene = builder::build(&body, &TourConfig::default(), 1280.0);
        for _ in 0..steps {
            motion::step(&mut scene);
        }
        for (node, config) in scene.moons.iter().zip(&body.moons) {
            let position = node.mesh.transform.translation;
            prop_assert!((position.length() - config.orbit_radius).abs() < 1e-3);
            prop_assert!(position.y.abs() < 1e-4);
            prop_assert!((0.0..=std::f32::consts::TAU).contains(&node.angle));
        }
        let expected_spin = steps as f32 * body.spin;
        prop_assert!((scene.primary.transform.rotation.y - expected_spin).abs() < 1e-2);
    }

    /// Applying the same window twice changes nothing the second time.
    #[test]
    fn prop_resize_idempotent(
        id in prop::sample::select(BodyId::ALL.to_vec()),
        width in 200.0f32..3000.0,
        height in 200.0f32..2000.0,
        then_width in 200.0f32..3000.0,
    ) {
        let tour = TourConfig::default();
        let body = BodyConfig::for_body(id);
        let mut camera = PerspectiveCamera::new(body.camera.fov_degrees, 1.0, body.camera.near, body.camera.far);
        camera.set_distance(body.camera.distance);
        let (mut renderer, log) = RecordingRenderer::new();
        let mut binder = ViewportBinder::new(&tour, body.camera);

        binder.on_resize(WindowSize::new(width, height), &mut camera, &mut renderer);
        let window = WindowSize::new(then_width, height);
        binder.on_resize(window, &mut camera, &mut renderer);
        let state = *binder.state().unwrap();
        let distance = camera.distance();
        let resizes = log.borrow().resizes.len();

        let outcome = binder.on_resize(window, &mut camera, &mut renderer);
        prop_assert!(!outcome.any());
        prop_assert_eq!(*binder.state().unwrap(), state);
        prop_assert_eq!(camera.distance(), distance);
        prop_assert_eq!(log.borrow().resizes.len(), resizes);
        prop_assert_eq!(state.mobile, then_width < tour.mobile_breakpoint);
        prop_assert_eq!(state.surface_width, (then_width * 2.0).round() as u32);
    }

    /// Whatever the page does with visibility and frames, at most one frame
    /// is outstanding, the loop follows the last visibility, and unmount
    /// leaves the host clean.
    #[test]
    fn prop_visibility_sequences(
        id in prop::sample::select(BodyId::ALL.to_vec()),
        start_visible in any::<bool>(),
        events in prop::collection::vec((any::<bool>(), 0usize..4), 0..24),
    ) {
        let mut host = FakeHost::desktop();
        host.visibility = if start_visible { Visibility::Visible } else { Visibility::Hidden };
        let mut assets = FakeAssets::default();
        let mut stage = stage();
        let (renderer, log) = RecordingRenderer::new();
        stage.navigate(id.route(), &mut host, &mut assets, move || renderer);

        let mut visible = start_visible;
        let mut hidden_transitions = u32::from(!start_visible);
        for (next_visible, frames) in events {
            if next_visible != visible {
                hidden_transitions += u32::from(!next_visible);
                visible = next_visible;
            }
            host.visibility = if next_visible { Visibility::Visible } else { Visibility::Hidden };
            stage.on_visibility(&mut host);
            run_frames(&mut stage, &mut host, frames);
            prop_assert!(host.pending_frames() <= 1);

            let mounted = stage.current().unwrap();
            let expected = if visible { RenderLoopState::Running } else { RenderLoopState::Suspended };
            prop_assert_eq!(mounted.state(), expected);
            if visible {
                prop_assert_eq!(host.pending_frames(), 1);
            }
        }
        prop_assert_eq!(stage.current().unwrap().suspensions(), hidden_transitions);

        stage.unmount(&mut host, &mut assets);
        prop_assert_eq!(host.pending_frames(), 0);
        prop_assert_eq!(host.listener_count(), 0);
        prop_assert!(log.borrow().disposed);
        prop_assert_eq!(log.borrow().draws_after_dispose, 0);
    }
}
