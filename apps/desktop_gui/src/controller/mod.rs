//! Controller layer: UI events, error modeling, and event queueing.

pub mod events;
pub mod orchestration;
