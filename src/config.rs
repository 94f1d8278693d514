//! @ai:module:intent Configuration structs for the benchmark harness
//! @ai:module:layer infrastructure
//! @ai:module:public_api HarnessConfig, CorrectorConfig, DuplicatePolicy
//! @ai:module:stateless true

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// @ai:intent Main configuration for the benchmark harness
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(default)]
    pub corrector: CorrectorConfig,
}

/// @ai:intent How the external corrector is invoked and how its output is trusted
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectorConfig {
    #[serde(default = "default_program")]
    pub program: PathBuf,
    /// Arguments placed before the count flag on every invocation
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_count_flag")]
    pub count_flag: String,
    /// Count the corrector uses when the flag is omitted
    #[serde(default = "default_count")]
    pub default_count: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

/// @ai:intent What to do when the corrector answers the same term twice
/// @ai:effects pure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Abort the run with a duplicate-response error
    #[default]
    Strict,
    /// Keep the last answer for the term
    Permissive,
}

impl DuplicatePolicy {
    /// @ai:intent Convert policy to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Strict => "strict",
            DuplicatePolicy::Permissive => "permissive",
        }
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
            count_flag: default_count_flag(),
            default_count: default_count(),
            timeout_secs: default_timeout_secs(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

fn default_program() -> PathBuf {
    PathBuf::from("./spell")
}

fn default_count_flag() -> String {
    "-c".to_string()
}

fn default_count() -> u32 {
    1
}

fn default_timeout_secs() -> u64 {
    300
}

impl CorrectorConfig {
    /// @ai:intent Wall-clock bound on a single corrector invocation
    /// @ai:effects pure
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl HarnessConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_reference_corrector() {
        let config = CorrectorConfig::default();
        assert_eq!(config.program, PathBuf::from("./spell"));
        assert_eq!(config.count_flag, "-c");
        assert_eq!(config.default_count, 1);
        assert_eq!(config.duplicates, DuplicatePolicy::Strict);
        assert_eq!(config.timeout(), Duration::from_secs(300));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: HarnessConfig = toml::from_str(
            r#"
[corrector]
program = "/usr/local/bin/spell"
duplicates = "permissive"
"#,
        )
        .unwrap();

        assert_eq!(config.corrector.program, PathBuf::from("/usr/local/bin/spell"));
        assert_eq!(config.corrector.duplicates, DuplicatePolicy::Permissive);
        assert_eq!(config.corrector.count_flag, "-c");
        assert_eq!(config.corrector.timeout_secs, 300);
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bench.toml");

        let mut config = HarnessConfig::default();
        config.corrector.args = vec!["-d".to_string(), "dict.txt".to_string()];
        config.corrector.timeout_secs = 30;
        config.save(&path).unwrap();

        let loaded = HarnessConfig::load(&path).unwrap();
        assert_eq!(loaded.corrector, config.corrector);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: HarnessConfig = toml::from_str("").unwrap();
        assert_eq!(config.corrector, CorrectorConfig::default());
    }
}
