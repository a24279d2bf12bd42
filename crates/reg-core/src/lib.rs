//! # reg-core
//!
//! Core types shared across all Registrar crates.
//!
//! This crate provides:
//! - Record structs for the five registries (entity codes, modules, products,
//!   projects, standards)
//! - Closed vocabularies as enums that keep unknown values verbatim
//! - Sequential identifier helpers (`MOD-###`, `PRD-###`)
//! - The diagnostic/report model threaded through validation and rendering
//! - `Collection` and `Registries`, the typed hand-off between stages

pub mod collection;
pub mod diagnostics;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod lenient;

pub use collection::{Collection, Registries, RegistryRecord};
pub use diagnostics::{Diagnostic, Report, Severity};
pub use enums::RegistryKind;
pub use errors::CoreError;
