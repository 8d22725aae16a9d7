//! Entity enum header generation
//!
//! Reads the entity catalog, validates the normalized identifiers and writes
//! the header in one pass. Nothing is written unless every earlier step
//! succeeded, so a failed run leaves any previous header untouched.

use crate::catalog::EntityCatalog;
use crate::error::{GenerateError, GenerateResult};
use crate::render::{DEFAULT_ENUM_NAME, EntityEnum};
use crate::validation::{DuplicatePolicy, IdentifierIssue, IdentifierValidator};
use anyhow::{Context, Result};
use derive_builder::Builder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Catalog location, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "data/entities.json";

/// Header location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "headers/entity_enums.hpp";

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// JSON catalog to read
    pub input_path: PathBuf,
    /// Header to overwrite
    pub output_path: PathBuf,
    /// Name of the generated `enum class`
    pub enum_name: String,
    /// Handling of identifiers that collide after normalization
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl GenerationOptions {
    /// Default paths resolved against a project directory
    pub fn for_project<P: AsRef<Path>>(project_dir: P) -> Self {
        let project_dir = project_dir.as_ref();
        Self {
            input_path: project_dir.join(DEFAULT_INPUT_PATH),
            output_path: project_dir.join(DEFAULT_OUTPUT_PATH),
            ..Self::default()
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub entity_count: usize,
    pub warnings: Vec<IdentifierIssue>,
}

impl GenerationReport {
    /// One-line summary printed after a run
    pub fn summary(&self) -> String {
        format!(
            "Generated {} with {} entities.",
            self.output_path.display(),
            self.entity_count
        )
    }
}

/// Generator for the entity enum header
pub struct EnumHeaderGenerator {
    options: GenerationOptions,
}

impl EnumHeaderGenerator {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Read, validate, render and write the header
    pub fn run(&self) -> GenerateResult<GenerationReport> {
        let catalog = EntityCatalog::from_path(&self.options.input_path)?;
        let entity_enum = self.build_enum(&catalog);
        let warnings = self.check_identifiers(&entity_enum)?;

        let code = entity_enum.render();
        fs::write(&self.options.output_path, code).map_err(|source| {
            GenerateError::WriteOutput {
                path: self.options.output_path.clone(),
                source,
            }
        })?;
        info!(
            "Wrote {} members of {} to {}",
            entity_enum.len(),
            entity_enum.name,
            self.options.output_path.display()
        );

        Ok(GenerationReport {
            output_path: self.options.output_path.clone(),
            entity_count: entity_enum.len(),
            warnings,
        })
    }

    fn build_enum(&self, catalog: &EntityCatalog) -> EntityEnum {
        let entity_enum = EntityEnum::from_catalog(&self.options.enum_name, catalog);
        for member in &entity_enum.members {
            debug!("{} -> {}", member.entity, member.identifier);
        }
        entity_enum
    }

    fn check_identifiers(&self, entity_enum: &EntityEnum) -> GenerateResult<Vec<IdentifierIssue>> {
        let mut validation = IdentifierValidator::new().validate(entity_enum);

        if self.options.duplicate_policy == DuplicatePolicy::Allow {
            validation.downgrade_errors();
        }

        if let Some(error) = validation
            .errors
            .into_iter()
            .find_map(IdentifierIssue::into_error)
        {
            return Err(error);
        }

        for issue in &validation.warnings {
            warn!("{}", issue);
        }
        Ok(validation.warnings)
    }
}

impl Default for EnumHeaderGenerator {
    fn default() -> Self {
        Self::new(GenerationOptions::default())
    }
}

/// Result of a code generation operation
#[derive(Debug, Clone, Builder)]
pub struct CodegenResult {
    pub generator_name: String,
    pub files_generated: Vec<PathBuf>,
    pub entity_count: usize,
    #[builder(default)]
    pub warnings: Vec<String>,
    pub message: String,
}

/// Trait for code generators driven from build scripts
pub trait CodeGenerator {
    /// Name of this generator (e.g. "entity-enum")
    fn generator_name(&self) -> &str;

    /// Check if this generator has an input to work from
    fn should_generate(&self) -> bool;

    /// Generate the output files
    fn generate(&self) -> Result<CodegenResult>;
}

impl CodeGenerator for EnumHeaderGenerator {
    fn generator_name(&self) -> &str {
        "entity-enum"
    }

    fn should_generate(&self) -> bool {
        self.options.input_path.exists()
    }

    fn generate(&self) -> Result<CodegenResult> {
        let report = self.run().with_context(|| {
            format!(
                "{} generator failed for {}",
                self.generator_name(),
                self.options.input_path.display()
            )
        })?;

        let result = CodegenResultBuilder::default()
            .generator_name(self.generator_name().to_string())
            .files_generated(vec![report.output_path.clone()])
            .entity_count(report.entity_count)
            .warnings(report.warnings.iter().map(ToString::to_string).collect())
            .message(report.summary())
            .build()?;
        Ok(result)
    }
}

/// Run the enum generator with default paths under `project_dir`
pub fn codegen<P: AsRef<Path>>(project_dir: P) -> Result<Vec<CodegenResult>> {
    let generator = EnumHeaderGenerator::new(GenerationOptions::for_project(project_dir));
    if !generator.should_generate() {
        debug!(
            "No entity catalog at {}, skipping",
            generator.options().input_path.display()
        );
        return Ok(vec![]);
    }
    Ok(vec![generator.generate()?])
}
