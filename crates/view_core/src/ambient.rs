//! Decorative background drift: an endless yoyo between the rest pose and a
//! random target, re-drawn on every loop iteration.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::easing::Easing;

/// Shortest leg the drift accepts, whatever the bounds ask for.
pub const MIN_LEG_SECS: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftBounds {
    pub max_offset: f32,
    pub max_rotation_deg: f32,
    pub min_leg_secs: f64,
    pub max_leg_secs: f64,
}

impl Default for DriftBounds {
    fn default() -> Self {
        Self {
            max_offset: 20.0,
            max_rotation_deg: 5.0,
            min_leg_secs: 15.0,
            max_leg_secs: 25.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub dx: f32,
    pub dy: f32,
    pub rotation_deg: f32,
}

impl Pose {
    fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            dx: self.dx + (to.dx - self.dx) * t,
            dy: self.dy + (to.dy - self.dy) * t,
            rotation_deg: self.rotation_deg + (to.rotation_deg - self.rotation_deg) * t,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Leg {
    from: Pose,
    to: Pose,
    started_at: f64,
    duration: f64,
    returning: bool,
}

#[derive(Debug, Clone)]
pub struct AmbientDrift {
    bounds: DriftBounds,
    rng: StdRng,
    leg: Leg,
    iteration: u64,
}

impl AmbientDrift {
    pub fn seeded(bounds: DriftBounds, seed: u64, now: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let leg = outbound_leg(&bounds, &mut rng, now);
        Self {
            bounds,
            rng,
            leg,
            iteration: 0,
        }
    }

    /// Completed out-and-back loops so far.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn bounds(&self) -> DriftBounds {
        self.bounds
    }

    pub fn pose(&mut self, now: f64) -> Pose {
        while now - self.leg.started_at >= self.leg.duration {
            let ended_at = self.leg.started_at + self.leg.duration;
            if now - ended_at >= 2.0 * self.leg.duration {
                // suspended for longer than a loop: restart from rest
                self.iteration += 1;
                self.leg = outbound_leg(&self.bounds, &mut self.rng, now);
                break;
            }
            self.leg = if self.leg.returning {
                self.iteration += 1;
                outbound_leg(&self.bounds, &mut self.rng, ended_at)
            } else {
                Leg {
                    from: self.leg.to,
                    to: self.leg.from,
                    started_at: ended_at,
                    duration: self.leg.duration,
                    returning: true,
                }
            };
        }

        let raw = ((now - self.leg.started_at) / self.leg.duration).clamp(0.0, 1.0) as f32;
        self.leg
            .from
            .lerp(self.leg.to, Easing::SineInOut.apply(raw))
    }
}

fn symmetric(rng: &mut StdRng, limit: f32) -> f32 {
    if limit <= 0.0 {
        0.0
    } else {
        rng.random_range(-limit..=limit)
    }
}

fn outbound_leg(bounds: &DriftBounds, rng: &mut StdRng, started_at: f64) -> Leg {
    let to = Pose {
        dx: symmetric(rng, bounds.max_offset),
        dy: symmetric(rng, bounds.max_offset),
        rotation_deg: symmetric(rng, bounds.max_rotation_deg),
    };
    let min = bounds.min_leg_secs.max(MIN_LEG_SECS);
    let max = bounds.max_leg_secs.max(min);
    Leg {
        from: Pose::default(),
        to,
        started_at,
        duration: rng.random_range(min..=max),
        returning: false,
    }
}

/// Tracks how many animation loops are alive so the host knows whether it
/// must keep producing frames.
#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler {
    active: Arc<AtomicUsize>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_loops(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    pub fn is_idle(&self) -> bool {
        self.active_loops() == 0
    }

    fn register(&self) -> LoopRegistration {
        self.active.fetch_add(1, Ordering::AcqRel);
        LoopRegistration {
            active: Arc::clone(&self.active),
        }
    }
}

#[derive(Debug)]
struct LoopRegistration {
    active: Arc<AtomicUsize>,
}

impl Drop for LoopRegistration {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Mounted ambient animation. Dropping it releases the scheduler slot.
#[derive(Debug)]
pub struct AmbientLoop {
    drift: AmbientDrift,
    _registration: LoopRegistration,
}

impl AmbientLoop {
    pub fn mount(scheduler: &AnimationScheduler, bounds: DriftBounds, seed: u64, now: f64) -> Self {
        Self {
            drift: AmbientDrift::seeded(bounds, seed, now),
            _registration: scheduler.register(),
        }
    }

    pub fn pose(&mut self, now: f64) -> Pose {
        self.drift.pose(now)
    }

    pub fn iteration(&self) -> u64 {
        self.drift.iteration()
    }
}

#[cfg(test)]
#[path = "tests/ambient_tests.rs"]
mod tests;
