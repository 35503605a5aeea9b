// ui/mod.rs
//
// One module per page feature. Each owns its DOM wiring and drives the
// matching engine state machine; each no-ops when its elements are missing.

pub mod burst;
pub mod letter;
pub mod memory;
pub mod quiz;
pub mod scroll;
pub mod theme;
