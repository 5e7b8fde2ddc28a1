//! View-state machine, page transition, ambient drift and scene composition
//! for the newsroom page. Pure logic: no rendering and no I/O.

use shared::domain::NewsId;
use thiserror::Error;

pub mod ambient;
pub mod easing;
pub mod scene;
pub mod session;
pub mod state;
pub mod transition;

pub use ambient::{AmbientLoop, AnimationScheduler, DriftBounds, Pose};
pub use scene::{MountedPage, NavEntry, PageBody, Scene, SearchForm};
pub use session::NewsroomSession;
pub use state::ViewState;
pub use transition::{LegOrigin, PageFrame, PageTransition, TransitionPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("news {0} is not in the content store")]
    UnknownNews(NewsId),
}
