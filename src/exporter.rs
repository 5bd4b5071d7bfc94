use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::parser::JavaParser;
use crate::scanner;
use crate::ts_generator::{ExportedFile, TsCodeGenerator};

/// What one run wrote, in the order it was written
#[derive(Debug)]
pub struct ExportReport {
    pub files: Vec<ExportedFile>,
    pub index_path: PathBuf,
}

/// Runs the Java → TypeScript export as a single linear batch.
///
/// Each phase returns the files it wrote. Nothing is carried between runs.
pub struct Exporter<'a> {
    config: &'a Config,
    parser: JavaParser,
    generator: TsCodeGenerator,
}

impl<'a> Exporter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            parser: JavaParser::new(),
            generator: TsCodeGenerator::new(
                config.output.path.clone(),
                config.output.extension.clone(),
            ),
        }
    }

    pub fn export_all(&self) -> Result<ExportReport> {
        self.generator.prepare()?;

        println!("Starting Java → TypeScript export...\n");

        println!("=== Exporting Standalone Enums ===");
        let mut files = self.export_standalone_enums()?;

        println!("\n=== Exporting Nested Enums ===");
        files.extend(self.export_nested_enums()?);

        println!("\n=== Exporting Constants ===");
        files.extend(self.export_constants()?);

        println!("\n=== Generating Index File ===");
        let index_path = self.generate_index(&files)?;

        println!(
            "\n✅ Export complete! {} files generated in {}",
            files.len(),
            self.generator.output_path().display()
        );

        Ok(ExportReport { files, index_path })
    }

    /// One enum per file in each configured enum directory
    pub fn export_standalone_enums(&self) -> Result<Vec<ExportedFile>> {
        let mut written = Vec::new();

        for dir in &self.config.sources.enum_dirs {
            let dir = self.config.resolve_source(dir);
            if !dir.exists() {
                tracing::warn!("Path not found: {}", dir.display());
                continue;
            }
            if !dir.is_dir() {
                tracing::warn!("Not a directory: {}", dir.display());
                continue;
            }

            for path in scanner::list_source_files(&dir, &self.config.sources.source_suffix)? {
                let Some(info) = self.parser.parse_enum_file(&path)? else {
                    tracing::debug!("No public enum in {}", path.display());
                    continue;
                };
                if info.values.is_empty() {
                    tracing::debug!("Skipping {}: no constant values found", info.name);
                    continue;
                }

                let record = self.generator.write_enum(&info.name, &info.values)?;
                println!(
                    "✓ Exported {} → {}",
                    info.name,
                    record.output_path.display()
                );
                written.push(record);
            }
        }

        Ok(written)
    }

    /// Enums nested in entity classes, flattened to `<Class><Enum>`
    pub fn export_nested_enums(&self) -> Result<Vec<ExportedFile>> {
        let mut written = Vec::new();

        for file in &self.config.sources.nested_enum_files {
            let path = self.config.resolve_source(file);
            if !path.exists() {
                tracing::warn!("File not found: {}", path.display());
                continue;
            }

            for nested in self.parser.parse_nested_enum_file(&path)? {
                let name = nested.declared_name();
                let record = self.generator.write_enum(&name, &nested.values)?;
                println!(
                    "✓ Exported {}.{} → {}.{}",
                    nested.parent_name, nested.enum_name, name, self.config.output.extension
                );
                written.push(record);
            }
        }

        Ok(written)
    }

    /// Constant holders, each parsed with the strategy from its config entry
    pub fn export_constants(&self) -> Result<Vec<ExportedFile>> {
        let mut written = Vec::new();

        for source in &self.config.sources.constants {
            let path = self.config.resolve_source(&source.path);
            if !path.exists() {
                tracing::warn!("File not found: {}", path.display());
                continue;
            }

            let Some(strategy) = source.resolved_strategy() else {
                tracing::debug!("No constant strategy applies to {}", path.display());
                continue;
            };

            for group in self
                .parser
                .parse_constants_file(&path, strategy, &source.label)?
            {
                let record = self.generator.write_constant_group(&group)?;
                println!(
                    "✓ Exported {} constants → {}",
                    group.name,
                    record.output_path.display()
                );
                written.push(record);
            }
        }

        Ok(written)
    }

    pub fn generate_index(&self, files: &[ExportedFile]) -> Result<PathBuf> {
        let index_path = self.generator.write_index(files)?;
        println!(
            "\n✓ Generated {} with {} exports",
            index_path.display(),
            files.len()
        );
        Ok(index_path)
    }
}
