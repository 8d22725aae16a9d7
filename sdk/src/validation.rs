//! Identifier validation for generated enums

use crate::error::GenerateError;
use crate::normalize::starts_with_digit;
use crate::render::EntityEnum;
use std::collections::HashMap;
use std::fmt;

/// What to do when two entities produce the same enum member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail before anything is written
    #[default]
    Reject,
    /// Emit the members verbatim and only warn
    Allow,
}

/// A problem found with a generated identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierIssue {
    Duplicate {
        identifier: String,
        first: String,
        second: String,
    },
    Empty {
        entity: String,
    },
    LeadingDigit {
        entity: String,
        identifier: String,
    },
}

impl IdentifierIssue {
    /// Convert into a generation error; leading digits are never fatal
    pub fn into_error(self) -> Option<GenerateError> {
        match self {
            IdentifierIssue::Duplicate {
                identifier,
                first,
                second,
            } => Some(GenerateError::DuplicateIdentifier {
                identifier,
                first,
                second,
            }),
            IdentifierIssue::Empty { entity } => Some(GenerateError::EmptyIdentifier { entity }),
            IdentifierIssue::LeadingDigit { .. } => None,
        }
    }
}

impl fmt::Display for IdentifierIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierIssue::Duplicate {
                identifier,
                first,
                second,
            } => write!(
                f,
                "entities '{}' and '{}' both normalize to '{}'",
                first, second, identifier
            ),
            IdentifierIssue::Empty { entity } => {
                write!(f, "entity '{}' normalizes to an empty identifier", entity)
            }
            IdentifierIssue::LeadingDigit { entity, identifier } => write!(
                f,
                "identifier '{}' for entity '{}' starts with a digit",
                identifier, entity
            ),
        }
    }
}

/// Result of validating an enum
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<IdentifierIssue>,
    pub warnings: Vec<IdentifierIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Move every error into the warnings, keeping their order
    pub fn downgrade_errors(&mut self) {
        let mut warnings = std::mem::take(&mut self.errors);
        warnings.append(&mut self.warnings);
        self.warnings = warnings;
    }
}

/// Validator for enum member identifiers
pub struct IdentifierValidator {
    errors: Vec<IdentifierIssue>,
    warnings: Vec<IdentifierIssue>,
}

impl IdentifierValidator {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check uniqueness and shape of every member identifier
    pub fn validate(&mut self, entity_enum: &EntityEnum) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        let mut first_owner: HashMap<&str, &str> = HashMap::new();
        for member in &entity_enum.members {
            if member.identifier.is_empty() {
                self.errors.push(IdentifierIssue::Empty {
                    entity: member.entity.clone(),
                });
                continue;
            }

            if let Some(first) = first_owner.get(member.identifier.as_str()) {
                self.errors.push(IdentifierIssue::Duplicate {
                    identifier: member.identifier.clone(),
                    first: first.to_string(),
                    second: member.entity.clone(),
                });
                continue;
            }
            first_owner.insert(&member.identifier, &member.entity);

            if starts_with_digit(&member.identifier) {
                self.warnings.push(IdentifierIssue::LeadingDigit {
                    entity: member.entity.clone(),
                    identifier: member.identifier.clone(),
                });
            }
        }

        ValidationResult {
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
        }
    }
}

impl Default for IdentifierValidator {
    fn default() -> Self {
        Self::new()
    }
}
