//! Record structs for the five registries.
//!
//! Field names follow the camelCase keys of the registry files. Every field is
//! decoded through [`crate::lenient`], so a record decodes even when the
//! validator is about to reject it.

mod entity_code;
mod module;
mod product;
mod project;
mod standard;

pub use entity_code::EntityCode;
pub use module::Module;
pub use product::Product;
pub use project::Project;
pub use standard::Standard;
