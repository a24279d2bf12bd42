//! # reg-schema
//!
//! Registry validation for Registrar.
//!
//! This crate provides:
//! - `rules`: the declarative rule table (required fields, vocabularies,
//!   patterns, uniqueness, sequential ids) and its compiled form
//! - `validator`: the generic interpreter that checks one registry file
//! - `crossref`: resolution of references between registries
//! - `batch`: validation of a whole registry directory
//! - `store`: reading, appending to and restoring registry files
//! - `export`: JSON Schema export of the rule table (`regctl schema`)
//!
//! ## Architecture
//!
//! Record types and vocabularies are defined in `reg-core`. Content problems
//! are reported as diagnostics in a `Report`; `SchemaError` is reserved for
//! failures that abort a run, such as an unreadable registry file.

pub mod batch;
pub mod crossref;
pub mod error;
pub mod export;
pub mod rules;
pub mod store;
pub mod validator;

pub use batch::{BatchOutcome, validate_dir};
pub use error::SchemaError;
pub use export::SchemaCatalog;
pub use rules::RuleRegistry;
pub use validator::{Validated, validate_document, validate_value};
