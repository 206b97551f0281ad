//! Weighted roulette wheel.
//!
//! `services::resolver` turns raw entries into shares, `services::wheel`
//! maps a rotation to the item under the pointer, and
//! `services::controller` drives a spin frame by frame. The `wheelspin`
//! binary wires these to the command line.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
