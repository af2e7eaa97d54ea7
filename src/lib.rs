//! Camp Haliburton library crate — re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the actual game entry point.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can drive the fixed-tick simulation without a window or GPU.

pub mod shared;
pub mod input;
pub mod player;
pub mod world;
pub mod npcs;
pub mod economy;
pub mod mosquitoes;
pub mod ui;
pub mod save;
pub mod data;
