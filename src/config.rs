use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "enum-export.toml";

const JAVA_ROOT: &str = "src/main/java/com/tse/core_application";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_backend_root")]
    pub backend_root: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Extension of generated files, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,
    /// Directories holding one standalone enum per file
    #[serde(default = "default_enum_dirs")]
    pub enum_dirs: Vec<PathBuf>,
    /// Entity files declaring enums nested in their class
    #[serde(default = "default_nested_enum_files")]
    pub nested_enum_files: Vec<PathBuf>,
    #[serde(default = "default_constants")]
    pub constants: Vec<ConstantSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstantSource {
    pub path: PathBuf,
    pub label: String,
    #[serde(default)]
    pub strategy: Option<ConstantStrategy>,
}

/// How a constants holder is turned into groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantStrategy {
    /// `public static final int NAME = 1;` fields, one group named by the label
    IntFields,
    /// Nested `public static class` blocks of String constants, one group per class
    StringClasses,
}

impl ConstantStrategy {
    /// Fallback when a source has no explicit strategy: decide from the file name
    pub fn infer(path: &Path) -> Option<Self> {
        let path = path.to_string_lossy();
        if path.contains("EntityTypes") {
            Some(ConstantStrategy::IntFields)
        } else if path.contains("Constants.java") {
            Some(ConstantStrategy::StringClasses)
        } else {
            None
        }
    }
}

impl ConstantSource {
    pub fn resolved_strategy(&self) -> Option<ConstantStrategy> {
        self.strategy.or_else(|| ConstantStrategy::infer(&self.path))
    }
}

fn default_backend_root() -> PathBuf {
    PathBuf::from("/root/Geo-fence/backend")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("/root/Geo-fence/enums-export")
}

fn default_extension() -> String {
    "ts".to_string()
}

fn default_source_suffix() -> String {
    ".java".to_string()
}

fn default_enum_dirs() -> Vec<PathBuf> {
    vec![Path::new(JAVA_ROOT).join("constants/attendance")]
}

fn default_nested_enum_files() -> Vec<PathBuf> {
    [
        "entity/policy/AttendancePolicy.java",
        "entity/fence/GeoFence.java",
        "entity/punch/PunchRequest.java",
    ]
    .iter()
    .map(|p| Path::new(JAVA_ROOT).join(p))
    .collect()
}

fn default_constants() -> Vec<ConstantSource> {
    vec![
        ConstantSource {
            path: Path::new(JAVA_ROOT).join("constants/EntityTypes.java"),
            label: "EntityTypes".to_string(),
            strategy: Some(ConstantStrategy::IntFields),
        },
        ConstantSource {
            path: Path::new(JAVA_ROOT).join("DummyClasses/Constants.java"),
            label: "Constants".to_string(),
            strategy: Some(ConstantStrategy::StringClasses),
        },
    ]
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            backend_root: default_backend_root(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            extension: default_extension(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            source_suffix: default_source_suffix(),
            enum_dirs: default_enum_dirs(),
            nested_enum_files: default_nested_enum_files(),
            constants: default_constants(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ExportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ExportError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve a configured source path against the backend root
    pub fn resolve_source(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project.backend_root.join(path)
        }
    }
}
