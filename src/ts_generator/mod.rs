mod const_gen;
mod enum_gen;
mod index_gen;

pub use const_gen::ConstGenerator;
pub use enum_gen::EnumGenerator;
pub use index_gen::{IndexGenerator, INDEX_HEADER};

use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};
use crate::parser::ConstantGroup;

/// A generated file, recorded so the index can re-export it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub declared_name: String,
    pub output_path: PathBuf,
}

/// Writes generated TypeScript into one output directory
pub struct TsCodeGenerator {
    output_path: PathBuf,
    extension: String,
}

impl TsCodeGenerator {
    pub fn new(output_path: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            output_path,
            extension: extension.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Create the output directory and any missing parents
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_path)
            .map_err(|e| ExportError::io(&self.output_path, e))
    }

    pub fn write_enum(&self, name: &str, values: &[String]) -> Result<ExportedFile> {
        let content = EnumGenerator::generate(name, values);
        self.write_declaration(name, &content)
    }

    pub fn write_constant_group(&self, group: &ConstantGroup) -> Result<ExportedFile> {
        let content = ConstGenerator::generate(group);
        self.write_declaration(&group.name, &content)
    }

    /// Write `index.<ext>` re-exporting every recorded file
    pub fn write_index(&self, files: &[ExportedFile]) -> Result<PathBuf> {
        let content = IndexGenerator::new(&self.extension).generate(files);
        let path = self.output_path.join(format!("index.{}", self.extension));
        write_file(&path, &content)?;
        Ok(path)
    }

    fn write_declaration(&self, name: &str, content: &str) -> Result<ExportedFile> {
        let path = self
            .output_path
            .join(format!("{}.{}", name, self.extension));
        write_file(&path, content)?;
        Ok(ExportedFile {
            declared_name: name.to_string(),
            output_path: path,
        })
    }
}

/// Existing files are overwritten unconditionally
fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| ExportError::io(path, e))
}
