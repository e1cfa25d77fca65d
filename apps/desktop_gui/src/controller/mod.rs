//! Controller layer: UI events, reducer-like form transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
