pub mod constant_info;
pub mod enum_info;

pub use constant_info::ConstantGroup;
pub use enum_info::{EnumInfo, NestedEnumInfo};

use regex::Regex;
use std::path::Path;

use crate::config::ConstantStrategy;
use crate::error::{ExportError, Result};

/// Pattern-based extractor for Java enum and constant declarations.
///
/// This is not a Java parser. Brace-delimited bodies end at the first `}`,
/// so enums with methods or constant-specific bodies are cut short.
pub struct JavaParser {
    public_enum: Regex,
    enum_body: Regex,
    public_class: Regex,
    nested_enum: Regex,
    int_constant: Regex,
    static_class: Regex,
    string_constant: Regex,
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            public_enum: compile(r"public\s+enum\s+(\w+)"),
            enum_body: compile(r"enum\s+\w+\s*\{([^}]+)\}"),
            public_class: compile(r"public\s+class\s+(\w+)"),
            nested_enum: compile(r"public\s+enum\s+(\w+)\s*\{([^}]+)\}"),
            int_constant: compile(r"public\s+static\s+final\s+int\s+(\w+)\s*=\s*(\d+);"),
            static_class: compile(r"public\s+static\s+(?:final\s+)?class\s+(\w+)\s*\{([^}]+)\}"),
            string_constant: compile(
                r#"public\s+static\s+final\s+String\s+(\w+)\s*=\s*"([^"]+)";"#,
            ),
        }
    }

    /// Read a file holding one standalone enum
    pub fn parse_enum_file(&self, path: &Path) -> Result<Option<EnumInfo>> {
        let content = read_source(path)?;
        Ok(self.parse_enum_source(&content, path))
    }

    /// Extract the `public enum` declared in `content`.
    ///
    /// Returns `None` when there is no such declaration. The returned enum may
    /// have no values; callers decide whether to keep it.
    pub fn parse_enum_source(&self, content: &str, path: &Path) -> Option<EnumInfo> {
        let decl = self.public_enum.captures(content)?;
        let whole = decl.get(0)?;
        let name = decl[1].to_string();

        let values = self
            .enum_body
            .captures(&content[whole.start()..])
            .map(|body| extract_enum_values(&body[1]))
            .unwrap_or_default();

        Some(EnumInfo {
            name,
            values,
            source_file: path.to_path_buf(),
        })
    }

    /// Read an entity file and collect the enums nested in its class
    pub fn parse_nested_enum_file(&self, path: &Path) -> Result<Vec<NestedEnumInfo>> {
        let content = read_source(path)?;
        Ok(self.parse_nested_enum_source(&content, path))
    }

    /// Every `public enum` in the file is attributed to the first `public class`,
    /// whether or not it sits inside that class's braces. Enums without values
    /// are dropped.
    pub fn parse_nested_enum_source(&self, content: &str, path: &Path) -> Vec<NestedEnumInfo> {
        let Some(class) = self.public_class.captures(content) else {
            return Vec::new();
        };
        let parent_name = class[1].to_string();

        let mut nested = Vec::new();
        for caps in self.nested_enum.captures_iter(content) {
            let enum_name = caps[1].to_string();
            let values = extract_enum_values(&caps[2]);

            if values.is_empty() {
                tracing::debug!(
                    "Skipping {}.{}: no constant values found",
                    parent_name,
                    enum_name
                );
                continue;
            }

            nested.push(NestedEnumInfo {
                parent_name: parent_name.clone(),
                enum_name,
                values,
                source_file: path.to_path_buf(),
            });
        }

        nested
    }

    /// Read a constants holder and extract its groups with `strategy`
    pub fn parse_constants_file(
        &self,
        path: &Path,
        strategy: ConstantStrategy,
        label: &str,
    ) -> Result<Vec<ConstantGroup>> {
        let content = read_source(path)?;
        Ok(self.parse_constants_source(&content, strategy, label))
    }

    pub fn parse_constants_source(
        &self,
        content: &str,
        strategy: ConstantStrategy,
        label: &str,
    ) -> Vec<ConstantGroup> {
        match strategy {
            ConstantStrategy::IntFields => {
                let mut group = ConstantGroup::new(label);
                for caps in self.int_constant.captures_iter(content) {
                    group.entries.insert(caps[1].to_string(), caps[2].to_string());
                }
                if group.is_empty() {
                    Vec::new()
                } else {
                    vec![group]
                }
            }
            ConstantStrategy::StringClasses => self
                .static_class
                .captures_iter(content)
                .filter_map(|class| {
                    let mut group = ConstantGroup::new(&class[1]);
                    for caps in self.string_constant.captures_iter(&class[2]) {
                        group
                            .entries
                            .insert(caps[1].to_string(), format!("\"{}\"", &caps[2]));
                    }
                    (!group.is_empty()).then_some(group)
                })
                .collect(),
        }
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))
}

/// Pull constant names out of an enum body, one per line.
///
/// Blank lines and lines starting with `//` or `*` are skipped. Each line is
/// cut at its first `,` or `;`, so only the first constant of a line survives.
pub fn extract_enum_values(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//") && !line.starts_with('*'))
        .filter_map(|line| line.split([',', ';']).next())
        .map(str::trim)
        .filter(|value| is_constant_name(value))
        .map(str::to_string)
        .collect()
}

/// Uppercase letters, digits and underscores, with at least one letter
pub fn is_constant_name(value: &str) -> bool {
    value.chars().any(char::is_uppercase)
        && value
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit() || c == '_')
}
