//! Controller layer: worker events, view actions and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
