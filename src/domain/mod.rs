//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep entry/item/wedge and report structs in one place.
//! - Avoid cyclic imports between resolver, wheel and controller.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — entries, resolved items, wedges, reports, config file.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or terminal side effects.
//!
//! ## Compatibility note
//! Changes in the report structs affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod models;
