pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::core::engine::DEFAULT_WORKERS;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{Grille, HoleBase, Mode, RotationDirection};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "turning-grille")]
#[command(about = "Encrypt and decrypt text with a turning grille")]
pub struct CliConfig {
    /// TOML file describing the grille; flags below override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Grid size N (the grille is N x N)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Rotation direction: 1 = clockwise, 0 = counterclockwise
    #[arg(short, long)]
    pub direction: Option<RotationDirection>,

    /// encrypt (1) or decrypt (0)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Hole coordinates, e.g. "1,1 1,2 2,1 2,2"
    #[arg(long)]
    pub holes: Option<String>,

    /// Treat hole coordinates as 0-based instead of 1-based
    #[arg(long)]
    pub zero_based: bool,

    /// Message to transcode; read from stdin when omitted
    #[arg(long)]
    pub message: Option<String>,

    /// Number of blocking tasks used for block processing
    #[arg(long)]
    pub workers: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print every block and its matrix
    #[arg(long)]
    pub show_blocks: bool,

    /// Drop trailing pad letters from the last decrypted block (lossy)
    #[arg(long)]
    pub strip_padding: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn hole_base(&self) -> HoleBase {
        if self.zero_based {
            HoleBase::ZeroBased
        } else {
            HoleBase::OneBased
        }
    }

    /// Copies every flag that was given onto a file-based config.
    pub fn apply_overrides(&self, config: &mut toml_config::TomlConfig) {
        if let Some(size) = self.size {
            config.grille.size = size;
        }
        if let Some(direction) = self.direction {
            config.grille.direction = direction.to_string();
        }
        if let Some(holes) = &self.holes {
            config.grille.holes = toml_config::HoleSpec::Text(holes.clone());
        }
        if self.zero_based {
            config.grille.one_based = Some(false);
        }
        let processing = config.processing.get_or_insert_with(Default::default);
        if let Some(mode) = self.mode {
            processing.mode = Some(mode);
        }
        if let Some(workers) = self.workers {
            processing.workers = Some(workers);
        }
        if self.strip_padding {
            processing.strip_padding = Some(true);
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn grille(&self) -> Result<Grille> {
        let size = *validation::validate_required_field("size", &self.size)?;
        let holes = validation::validate_required_field("holes", &self.holes)?;
        let holes = crate::utils::holes::parse_holes(holes, size, self.hole_base())?;
        let direction = *validation::validate_required_field("direction", &self.direction)?;
        Ok(Grille::new(size, direction, holes))
    }

    fn mode(&self) -> Mode {
        self.mode.unwrap_or(Mode::Encrypt)
    }

    fn workers(&self) -> usize {
        self.workers.unwrap_or(DEFAULT_WORKERS)
    }

    fn strip_padding(&self) -> bool {
        self.strip_padding
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let size = *validation::validate_required_field("size", &self.size)?;
        validation::validate_grille_size("size", size)?;
        let holes = validation::validate_required_field("holes", &self.holes)?;
        validation::validate_non_empty_string("holes", holes)?;
        validation::validate_required_field("direction", &self.direction)?;
        validation::validate_positive_number("workers", self.workers(), 1)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::GrilleError;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("turning-grille").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_grille() {
        let cli = parse(&["-n", "4", "-d", "0", "--holes", "1,1 1,2 2,1 2,2"]);
        assert!(cli.validate().is_ok());
        let grille = cli.grille().unwrap();
        assert_eq!(grille.size, 4);
        assert_eq!(grille.direction, RotationDirection::CounterClockwise);
        assert_eq!(grille.holes.len(), 4);
        assert_eq!(cli.mode(), Mode::Encrypt);
    }

    #[test]
    fn test_cli_requires_size_and_holes() {
        let cli = parse(&["--holes", "1,1"]);
        assert!(cli.validate().is_err());
        assert!(cli.grille().is_err());
    }

    #[test]
    fn test_cli_requires_direction() {
        let cli = parse(&["-n", "2", "--holes", "1,1"]);
        assert!(matches!(
            cli.validate(),
            Err(GrilleError::MissingConfigError { field }) if field == "direction"
        ));
        assert!(matches!(
            cli.grille(),
            Err(GrilleError::MissingConfigError { field }) if field == "direction"
        ));
    }

    #[test]
    fn test_cli_rejects_zero_workers() {
        let cli = parse(&["-n", "2", "-d", "1", "--holes", "1,1", "--workers", "0"]);
        assert!(matches!(
            cli.validate(),
            Err(GrilleError::InvalidConfigValueError { field, .. }) if field == "workers"
        ));
    }

    #[test]
    fn test_zero_based_flag_overrides_file_holes() {
        let mut config = toml_config::TomlConfig::from_toml_str(
            r#"
[grille]
size = 2
direction = "1"
holes = "0,0"
"#,
        )
        .unwrap();
        assert!(config.grille().is_err());

        parse(&["--zero-based"]).apply_overrides(&mut config);
        assert_eq!(config.hole_base(), HoleBase::ZeroBased);
        assert_eq!(config.grille().unwrap().holes, vec![crate::Position::new(0, 0)]);
    }

    #[test]
    fn test_cli_mode_and_format() {
        let cli = parse(&["-m", "decrypt", "--format", "json"]);
        assert_eq!(cli.mode, Some(Mode::Decrypt));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
