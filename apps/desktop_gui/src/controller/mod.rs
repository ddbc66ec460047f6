//! Controller layer: transcript state, UI events, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod transcript;
