//! Exit-then-enter page transition. Only one page body is ever mounted: the
//! outgoing page finishes its exit before the incoming page starts entering.

use shared::domain::Page;

use crate::easing::Easing;

pub const PAGE_TRANSITION_SECS: f64 = 0.5;
pub const PAGE_SLIDE_DISTANCE: f32 = 100.0;

/// Opacity and offset a leg animates away from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegOrigin {
    pub opacity: f32,
    pub offset_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    Settled(Page),
    Exiting {
        from: Page,
        to: Page,
        started_at: f64,
        origin: LegOrigin,
    },
    Entering {
        page: Page,
        started_at: f64,
        origin: LegOrigin,
    },
}

/// Visual state of the mounted page for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub page: Page,
    pub opacity: f32,
    pub offset_x: f32,
}

impl PageFrame {
    pub fn settled(page: Page) -> Self {
        Self {
            page,
            opacity: 1.0,
            offset_x: 0.0,
        }
    }

    fn origin(self) -> LegOrigin {
        LegOrigin {
            opacity: self.opacity,
            offset_x: self.offset_x,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageTransition {
    phase: TransitionPhase,
    duration: f64,
    distance: f32,
    easing: Easing,
}

impl PageTransition {
    pub fn new(initial: Page) -> Self {
        Self {
            phase: TransitionPhase::Settled(initial),
            duration: PAGE_TRANSITION_SECS,
            distance: PAGE_SLIDE_DISTANCE,
            easing: Easing::EaseInOut,
        }
    }

    /// Starts with the initial page playing its enter animation.
    pub fn mounting(initial: Page, now: f64) -> Self {
        let transition = Self::new(initial);
        Self {
            phase: TransitionPhase::Entering {
                page: initial,
                started_at: now,
                origin: transition.enter_origin(initial),
            },
            ..transition
        }
    }

    fn enter_origin(&self, page: Page) -> LegOrigin {
        LegOrigin {
            opacity: 0.0,
            offset_x: page.enter_direction() * self.distance,
        }
    }

    pub fn phase_at(&self, now: f64) -> TransitionPhase {
        let mut phase = self.phase;
        loop {
            phase = match phase {
                TransitionPhase::Exiting {
                    to, started_at, ..
                } if now - started_at >= self.duration => TransitionPhase::Entering {
                    page: to,
                    started_at: started_at + self.duration,
                    origin: self.enter_origin(to),
                },
                TransitionPhase::Entering {
                    page, started_at, ..
                } if now - started_at >= self.duration => TransitionPhase::Settled(page),
                settled_or_running => return settled_or_running,
            };
        }
    }

    /// Page the transition ends on once every queued animation completes.
    pub fn target(&self) -> Page {
        match self.phase {
            TransitionPhase::Settled(page) | TransitionPhase::Entering { page, .. } => page,
            TransitionPhase::Exiting { to, .. } => to,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        !matches!(self.phase_at(now), TransitionPhase::Settled(_))
    }

    /// Moves towards `target`. Returns `false` when nothing changes, including
    /// when `target` is already where the transition is heading. A reversal
    /// animates from the frame visible at `now`.
    pub fn request(&mut self, target: Page, now: f64) -> bool {
        self.phase = self.phase_at(now);
        let current = self.frame(now).origin();
        let next = match self.phase {
            TransitionPhase::Settled(page) if page == target => return false,
            TransitionPhase::Settled(page) => TransitionPhase::Exiting {
                from: page,
                to: target,
                started_at: now,
                origin: current,
            },
            TransitionPhase::Exiting { to, .. } if to == target => return false,
            TransitionPhase::Exiting { from, .. } if from == target => {
                TransitionPhase::Entering {
                    page: from,
                    started_at: now,
                    origin: current,
                }
            }
            TransitionPhase::Exiting {
                from,
                started_at,
                origin,
                ..
            } => TransitionPhase::Exiting {
                from,
                to: target,
                started_at,
                origin,
            },
            TransitionPhase::Entering { page, .. } if page == target => return false,
            TransitionPhase::Entering { page, .. } => TransitionPhase::Exiting {
                from: page,
                to: target,
                started_at: now,
                origin: current,
            },
        };
        self.phase = next;
        true
    }

    fn progress(&self, started_at: f64, now: f64) -> f32 {
        let raw = ((now - started_at) / self.duration).clamp(0.0, 1.0) as f32;
        self.easing.apply(raw)
    }

    pub fn frame(&self, now: f64) -> PageFrame {
        match self.phase_at(now) {
            TransitionPhase::Settled(page) => PageFrame::settled(page),
            TransitionPhase::Entering {
                page,
                started_at,
                origin,
            } => {
                let eased = self.progress(started_at, now);
                PageFrame {
                    page,
                    opacity: origin.opacity + (1.0 - origin.opacity) * eased,
                    offset_x: origin.offset_x * (1.0 - eased),
                }
            }
            TransitionPhase::Exiting {
                from,
                started_at,
                origin,
                ..
            } => {
                let eased = self.progress(started_at, now);
                let end_x = from.exit_direction() * self.distance;
                PageFrame {
                    page: from,
                    opacity: origin.opacity * (1.0 - eased),
                    offset_x: origin.offset_x + (end_x - origin.offset_x) * eased,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
