//! Entity enum CLI library
//!
//! Programmatic access to the `enumerate-entities` command. Useful for build.rs
//! scripts that regenerate the header during the build.

pub mod commands;

pub use commands::{Command, generate::GenCommand};
pub use entity_enums_sdk::{CodegenResult, codegen};

use entity_enums_sdk::DEFAULT_INPUT_PATH;
use std::path::Path;

/// Regenerate the entity enum header from a build script
pub fn generate_code<P: AsRef<Path>>(project_dir: P) {
    for line in build_script_lines(project_dir) {
        println!("{}", line);
    }
}

/// Cargo directives describing a generation run under `project_dir`
pub fn build_script_lines<P: AsRef<Path>>(project_dir: P) -> Vec<String> {
    let project_dir = project_dir.as_ref();
    let mut lines = vec![format!(
        "cargo:rerun-if-changed={}",
        project_dir.join(DEFAULT_INPUT_PATH).display()
    )];

    match codegen(project_dir) {
        Ok(results) => {
            for result in &results {
                for warning in &result.warnings {
                    lines.push(format!(
                        "cargo:warning={} generator: {}",
                        result.generator_name, warning
                    ));
                }
                let written: Vec<String> = result
                    .files_generated
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect();
                lines.push(format!(
                    "cargo:warning=Entity enum generation completed: {} entities written to {}",
                    result.entity_count,
                    written.join(", ")
                ));
            }
        }
        Err(e) => {
            lines.push(format!("cargo:warning=Entity enum generation failed: {:#}", e));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_script_lines_report_real_output_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::create_dir_all(dir.path().join("headers")).unwrap();
        fs::write(
            dir.path().join("data/entities.json"),
            r#"{"Cave Troll": 1, "2 Headed Snake": 2}"#,
        )
        .unwrap();

        let lines = build_script_lines(dir.path());
        let output = dir.path().join("headers/entity_enums.hpp");

        assert_eq!(
            lines[0],
            format!(
                "cargo:rerun-if-changed={}",
                dir.path().join("data/entities.json").display()
            )
        );
        assert!(lines[1].starts_with("cargo:warning=entity-enum generator: "));
        assert!(lines[1].contains("2_headed_snake"));
        assert_eq!(
            lines[2],
            format!(
                "cargo:warning=Entity enum generation completed: 2 entities written to {}",
                output.display()
            )
        );
        assert!(output.exists());
    }

    #[test]
    fn test_build_script_lines_without_catalog() {
        let dir = TempDir::new().unwrap();
        let lines = build_script_lines(dir.path());

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("cargo:rerun-if-changed="));
    }

    #[test]
    fn test_build_script_lines_report_failure() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/entities.json"), r#"{"A!": 1, "A?": 2}"#).unwrap();

        let lines = build_script_lines(dir.path());

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("cargo:warning=Entity enum generation failed: "));
        assert!(lines[1].contains("both normalize to identifier 'a'"));
    }
}
