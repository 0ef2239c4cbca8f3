use std::sync::Arc;

use parking_lot::Mutex;
use web_time::{Duration, Instant};

use crate::{Color, Transform};

/// `ln(1000)`: a spring counts as settled once its envelope drops to 0.1%.
const SPRING_SETTLE_LOG: f32 = 6.907_755;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Damped spring sized to settle within the animation's duration.
    /// `initial_velocity` is in units of the total distance per duration.
    Spring {
        damping_ratio: f32,
        initial_velocity: f32,
    },
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Spring {
                damping_ratio,
                initial_velocity,
            } => spring_progress(t, *damping_ratio, *initial_velocity),
        }
    }
}

fn spring_progress(t: f32, damping_ratio: f32, v0: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    let zeta = damping_ratio.clamp(0.01, 1.0);
    let omega = SPRING_SETTLE_LOG / zeta;

    if zeta < 1.0 {
        // Underdamped
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let b = (zeta * omega - v0) / omega_d;
        1.0 - decay * ((omega_d * t).cos() + b * (omega_d * t).sin())
    } else {
        // Critically damped
        1.0 - (-omega * t).exp() * (1.0 + (omega - v0) * t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

/// A quarter-second linear fade.
impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(Duration::from_millis(250), Easing::Linear)
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// `initial_velocity` is in units of the total distance per second, and
    /// is rescaled to the duration here.
    pub fn spring(duration: Duration, damping_ratio: f32, initial_velocity: f32) -> Self {
        Self::tween(
            duration,
            Easing::Spring {
                damping_ratio,
                initial_velocity: initial_velocity * duration.as_secs_f32(),
            },
        )
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let ch = |a: u8, b: u8| {
            (a as f32 + (b as f32 - a as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Color(
            ch(self.0, other.0),
            ch(self.1, other.1),
            ch(self.2, other.2),
            ch(self.3, other.3),
        )
    }
}

impl Interpolate for Transform {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Transform {
            translate_x: self.translate_x.interpolate(&other.translate_x, t),
            translate_y: self.translate_y.interpolate(&other.translate_y, t),
            scale_x: self.scale_x.interpolate(&other.scale_x, t),
            scale_y: self.scale_y.interpolate(&other.scale_y, t),
        }
    }
}

/// Source of "now" for every animation. Swap in [`TestClock`] to step time by hand.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A test clock you can drive deterministically. Clones share one timeline.
#[derive(Clone)]
pub struct TestClock {
    t: Arc<Mutex<Instant>>,
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            t: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.t.lock() += by;
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        *self.t.lock()
    }
}

/// One property moving from `start` to `target` over a spec.
#[derive(Clone, Debug)]
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    /// Retargets from wherever the value currently is.
    pub fn set_target(&mut self, target: T, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now);
    }

    /// Advances to `now`. Returns `true` while still animating.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(started) = self.start_time else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }
        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased);
        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }
}
