use crate::config::OutputFormat;
use crate::core::engine::DEFAULT_WORKERS;
use crate::core::ConfigProvider;
use crate::domain::model::{Grille, HoleBase, Mode, RotationDirection};
use crate::utils::error::{GrilleError, Result};
use crate::utils::holes;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub grille: GrilleSection,
    pub processing: Option<ProcessingConfig>,
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrilleSection {
    pub size: usize,
    /// "clockwise"/"1" or "counterclockwise"/"0".
    pub direction: String,
    pub holes: HoleSpec,
    /// Defaults to true.
    pub one_based: Option<bool>,
}

/// Holes as one string (`"1,1 1,2"`) or as an array of tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoleSpec {
    Text(String),
    List(Vec<String>),
}

impl HoleSpec {
    fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(tokens) => tokens.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub mode: Option<Mode>,
    pub workers: Option<usize>,
    pub strip_padding: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub show_blocks: Option<bool>,
}

impl TomlConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GrilleError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GrilleError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values; unknown ones stay as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static env pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn hole_base(&self) -> HoleBase {
        if self.grille.one_based.unwrap_or(true) {
            HoleBase::OneBased
        } else {
            HoleBase::ZeroBased
        }
    }

    pub fn direction(&self) -> Result<RotationDirection> {
        self.grille.direction.parse()
    }

    pub fn message(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.message.as_deref())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().and_then(|o| o.format).unwrap_or_default()
    }

    pub fn show_blocks(&self) -> bool {
        self.output.as_ref().and_then(|o| o.show_blocks).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn grille(&self) -> Result<Grille> {
        let size = self.grille.size;
        let base = self.hole_base();
        let holes = match &self.grille.holes {
            HoleSpec::Text(text) => holes::parse_holes(text, size, base)?,
            HoleSpec::List(tokens) => holes::parse_hole_list(tokens, size, base)?,
        };
        Ok(Grille::new(size, self.direction()?, holes))
    }

    fn mode(&self) -> Mode {
        self.processing
            .as_ref()
            .and_then(|p| p.mode)
            .unwrap_or(Mode::Encrypt)
    }

    fn workers(&self) -> usize {
        self.processing
            .as_ref()
            .and_then(|p| p.workers)
            .unwrap_or(DEFAULT_WORKERS)
    }

    fn strip_padding(&self) -> bool {
        self.processing
            .as_ref()
            .and_then(|p| p.strip_padding)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_grille_size("grille.size", self.grille.size)?;
        self.direction()?;
        if self.grille.holes.is_empty() {
            return Err(GrilleError::InvalidConfigValueError {
                field: "grille.holes".to_string(),
                value: String::new(),
                reason: "At least one hole is required".to_string(),
            });
        }
        validation::validate_positive_number("processing.workers", self.workers(), 1)?;
        Ok(())
    }
}
