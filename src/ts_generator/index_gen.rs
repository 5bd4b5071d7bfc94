use std::collections::BTreeMap;

use super::ExportedFile;

pub const INDEX_HEADER: &str = "// Auto-generated index file for all exported enums and constants";

/// Renders the barrel file re-exporting every generated module
pub struct IndexGenerator<'a> {
    extension: &'a str,
}

impl<'a> IndexGenerator<'a> {
    pub fn new(extension: &'a str) -> Self {
        Self { extension }
    }

    /// One `export *` line per declared name, sorted by name.
    /// A name written more than once is listed once, pointing at the last write.
    pub fn generate(&self, files: &[ExportedFile]) -> String {
        let mut by_name: BTreeMap<&str, &ExportedFile> = BTreeMap::new();
        for file in files {
            by_name.insert(file.declared_name.as_str(), file);
        }

        let mut lines = vec![INDEX_HEADER.to_string(), String::new()];
        for file in by_name.values() {
            lines.push(format!("export * from './{}';", self.module_name(file)));
        }

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }

    /// Output file name without its generated extension
    fn module_name(&self, file: &ExportedFile) -> String {
        let file_name = file
            .output_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.declared_name.clone());
        let suffix = format!(".{}", self.extension);
        file_name
            .strip_suffix(suffix.as_str())
            .map(str::to_string)
            .unwrap_or(file_name)
    }
}
