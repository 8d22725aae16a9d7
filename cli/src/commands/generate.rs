use super::Command;
use anyhow::{Context, Result};
use entity_enums_sdk::{
    DuplicatePolicy, EnumHeaderGenerator, GenerationOptions, GenerationReport,
};
use std::path::PathBuf;
use tracing::debug;

pub struct GenCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    pub enum_name: String,
    pub allow_duplicates: bool,
}

impl GenCommand {
    fn options(&self) -> GenerationOptions {
        GenerationOptions {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            enum_name: self.enum_name.clone(),
            duplicate_policy: if self.allow_duplicates {
                DuplicatePolicy::Allow
            } else {
                DuplicatePolicy::Reject
            },
        }
    }

    /// Run the generator and return its report without printing
    pub fn generate(&self) -> Result<GenerationReport> {
        let options = self.options();
        debug!("Generating with {:?}", options);

        EnumHeaderGenerator::new(options).run().with_context(|| {
            format!(
                "Failed to generate {} from {}",
                self.output.display(),
                self.input.display()
            )
        })
    }
}

impl Command for GenCommand {
    fn execute(&self) -> Result<()> {
        let report = self.generate()?;
        println!("{}", report.summary());
        Ok(())
    }
}
