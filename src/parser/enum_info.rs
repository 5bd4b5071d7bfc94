use std::path::PathBuf;

/// A top-level Java enum, one per file
#[derive(Debug, Clone)]
pub struct EnumInfo {
    /// Enum name
    pub name: String,
    /// Constant names in declaration order
    pub values: Vec<String>,
    /// Source file path
    pub source_file: PathBuf,
}

/// An enum declared inside an entity class
#[derive(Debug, Clone)]
pub struct NestedEnumInfo {
    /// Name of the enclosing class
    pub parent_name: String,
    /// Name of the nested enum
    pub enum_name: String,
    pub values: Vec<String>,
    pub source_file: PathBuf,
}

impl NestedEnumInfo {
    /// Flattened name used for the generated declaration, e.g. `GeoFenceLocationKind`
    pub fn declared_name(&self) -> String {
        format!("{}{}", self.parent_name, self.enum_name)
    }
}
