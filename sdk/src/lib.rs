//! Entity enum generation
//!
//! Turns a JSON entity catalog (`data/entities.json`) into a C++ header
//! declaring `enum class EntityType` with one member per catalog key.

pub mod catalog;
pub mod codegen;
pub mod error;
pub mod normalize;
pub mod render;
pub mod validation;

pub use catalog::EntityCatalog;
pub use codegen::{
    CodeGenerator, CodegenResult, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, EnumHeaderGenerator,
    GenerationOptions, GenerationReport, codegen,
};
pub use error::{GenerateError, GenerateResult};
pub use normalize::to_identifier;
pub use render::{DEFAULT_ENUM_NAME, EntityEnum, EnumMember};
pub use validation::{DuplicatePolicy, IdentifierIssue, IdentifierValidator, ValidationResult};
