//! Controller layer: UI events, reducer-like view updates, and dispatch to the game controller.

pub mod events;
pub mod orchestration;
pub mod reducer;
