// extensions/tween.rs
//
// One-shot scale tweens for the entrance animation, keyed by scene node.
// The tween state lives next to the scene graph, not inside it.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(SceneNode::Primary, Tween::scale_uniform(0.0, 1.0, 1.0, Easing::QuadOut));
//   tweens.tick(dt, &mut scene);  // Advances all tweens, updates node scales

use glam::Vec3;

use super::easing::ease;
use super::easing::Easing;
use crate::core::scene::{SceneHandle, SceneNode};

/// A single scale animation. Runs once, then is removed.
#[derive(Debug, Clone)]
pub struct Tween {
    pub from: Vec3,
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    /// Seconds to wait before starting.
    pub delay: f32,
    /// Elapsed time, including the delay.
    pub elapsed: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn scale(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            elapsed: 0.0,
            easing,
        }
    }

    /// Create a uniform scale tween.
    pub fn scale_uniform(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::scale(Vec3::splat(from), Vec3::splat(to), duration, easing)
    }

    // -- Builder methods --

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Normalized progress [0, 1], zero during the delay.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.elapsed >= self.delay {
                1.0
            } else {
                0.0
            }
        } else {
            ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Scale at the current progress.
    pub fn value(&self) -> Vec3 {
        let t = self.progress();
        Vec3::new(
            ease(self.from.x, self.to.x, t, self.easing),
            ease(self.from.y, self.to.y, t, self.easing),
            ease(self.from.z, self.to.z, t, self.easing),
        )
    }
}

/// Manages all active tweens of one scene.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: Vec<(SceneNode, Tween)>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween for a node.
    pub fn add(&mut self, node: SceneNode, tween: Tween) {
        self.tweens.push((node, tween));
    }

    /// Advance all tweens and apply them to the scene.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, dt: f32, scene: &mut SceneHandle) -> usize {
        for (node, tween) in self.tweens.iter_mut() {
            tween.elapsed += dt;
            if let Some(transform) = scene.node_transform_mut(*node) {
                transform.scale = tween.value();
            }
        }

        let before = self.tweens.len();
        self.tweens.retain(|(_, tween)| !tween.is_complete());
        before - self.tweens.len()
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active tweens.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyConfig, BodyId};
    use crate::config::TourConfig;
    use crate::systems::builder;

    fn saturn() -> SceneHandle {
        builder::build(BodyConfig::for_body(BodyId::Saturn), &TourConfig::default(), 1280.0)
    }

    #[test]
    fn tween_scale_halfway_and_done() {
        let mut scene = saturn();
        let mut tweens = TweenState::new();
        tweens.add(SceneNode::Primary, Tween::scale_uniform(0.0, 1.0, 1.0, Easing::Linear));

        tweens.tick(0.5, &mut scene);
        assert!((scene.primary.transform.scale.x - 0.5).abs() < 0.01);

        assert_eq!(tweens.tick(0.5, &mut scene), 1);
        assert_eq!(scene.primary.transform.scale, Vec3::ONE);
        assert!(tweens.is_empty());
    }

    #[test]
    fn delay_holds_start_value() {
        let mut scene = saturn();
        let mut tweens = TweenState::new();
        tweens.add(
            SceneNode::Ring,
            Tween::scale_uniform(0.0, 1.0, 1.0, Easing::Linear).with_delay(1.0),
        );

        tweens.tick(0.9, &mut scene);
        let ring = scene.ring.as_ref().unwrap();
        assert_eq!(ring.transform.scale, Vec3::ZERO);

        tweens.tick(0.6, &mut scene);
        let ring = scene.ring.as_ref().unwrap();
        assert!((ring.transform.scale.x - 0.5).abs() < 0.01);
    }

    #[test]
    fn zero_duration_snaps() {
        let tween = Tween::scale_uniform(0.0, 1.0, 0.0, Easing::QuadOut);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), Vec3::ONE);
    }

    #[test]
    fn missing_node_is_skipped() {
        let mut scene = saturn();
        let mut tweens = TweenState::new();
        tweens.add(SceneNode::Moon(3), Tween::scale_uniform(0.0, 1.0, 0.1, Easing::Linear));
        assert_eq!(tweens.tick(0.2, &mut scene), 1);
    }

    #[test]
    fn tweens_finish_independently() {
        let mut scene = saturn();
        let mut tweens = TweenState::new();
        tweens.add(SceneNode::Primary, Tween::scale_uniform(0.0, 1.0, 0.5, Easing::Linear));
        tweens.add(SceneNode::Ring, Tween::scale_uniform(0.0, 1.0, 1.0, Easing::Linear));

        assert_eq!(tweens.tick(0.5, &mut scene), 1);
        assert_eq!(tweens.len(), 1);
        assert_eq!(scene.primary.transform.scale, Vec3::ONE);
        assert_eq!(tweens.tick(0.5, &mut scene), 1);
        assert!(tweens.is_empty());
    }
}
