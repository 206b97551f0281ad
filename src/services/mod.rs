//! Service layer containing wheel logic and side-effect helpers.
//!
//! ## Service map
//! - `resolver.rs` — raw entries to shares that sum to 100.
//! - `wheel.rs` — wedge layout, pointer query, rotation state.
//! - `preset.rs` — standard/trap preset selection and trap session flag.
//! - `controller.rs` — spin phases and stop policies (decay/brake).
//! - `entries.rs` — CLI item syntax and item files.
//! - `config.rs` — config file loading and validation.
//! - `fingerprint.rs` — wheel ids and phrase seeds.
//! - `render.rs` — text rows for items, wedges and frames.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - `resolver` and `wheel` stay pure: no I/O, no clocks, no randomness.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod controller;
pub mod entries;
pub mod fingerprint;
pub mod output;
pub mod preset;
pub mod render;
pub mod resolver;
pub mod wheel;
