//! Grace configuration, loadable from TOML.

use serde::Deserialize;

use grace_llm::LlmConfig;

/// Top-level configuration for the assistant.
///
/// Every field has a default so Grace runs with no config file at all:
/// knowledge base and transcript in the working directory, both cloud
/// boundaries disabled.
#[derive(Debug, Clone, Deserialize)]
pub struct GraceConfig {
    /// Flat-file knowledge base path.
    #[serde(default = "default_kb_path")]
    pub kb_path: String,
    /// Append-only chat transcript path.
    #[serde(default = "default_transcript_path")]
    pub transcript_path: String,
    /// Cloud IAM lookup settings.
    #[serde(default)]
    pub iam: IamSettings,
    /// Hosted-LLM fallback settings.
    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct IamSettings {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LlmSettings {
    #[serde(default)]
    pub enabled: bool,
    /// Prepend the full knowledge base to the model's system content.
    #[serde(default)]
    pub include_kb_context: bool,
    #[serde(flatten)]
    pub model: LlmConfig,
}

fn default_kb_path() -> String {
    "knowledgebase.txt".to_string()
}

fn default_transcript_path() -> String {
    "grace_chat.log".to_string()
}

impl Default for GraceConfig {
    fn default() -> Self {
        Self {
            kb_path: default_kb_path(),
            transcript_path: default_transcript_path(),
            iam: IamSettings::default(),
            llm: LlmSettings::default(),
        }
    }
}

impl GraceConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from an explicit path (must exist), or fall back to defaults
    /// when no path was given.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
