use crate::core::validator::CoverageReport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrilleError {
    #[error("Invalid hole token '{token}': expected 'row,col' or 'row.col'")]
    InvalidHoleToken { token: String },

    #[error("Hole coordinate ({row}, {col}) out of range for a {size}x{size} grid")]
    InvalidHoleCoordinate { row: i64, col: i64, size: usize },

    #[error(
        "Grille size {size} is outside the supported range 1..={max}",
        max = crate::domain::model::MAX_GRILLE_SIZE
    )]
    InvalidGrilleSize { size: usize },

    #[error("Invalid rotation direction '{value}': expected 1 (clockwise) or 0 (counterclockwise)")]
    InvalidDirection { value: String },

    #[error("Invalid grille: {0}")]
    InvalidGrilleCoverage(CoverageReport),

    #[error("Plaintext chunk too long ({length}) for block capacity {capacity}")]
    ChunkTooLong { length: usize, capacity: usize },

    #[error("Ciphertext length {length} is not a multiple of the block length {block_len}")]
    CiphertextLengthMismatch { length: usize, block_len: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Block task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Grille,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GrilleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidHoleToken { .. }
            | Self::InvalidHoleCoordinate { .. }
            | Self::CiphertextLengthMismatch { .. } => ErrorCategory::Input,
            Self::InvalidGrilleSize { .. }
            | Self::InvalidDirection { .. }
            | Self::InvalidGrilleCoverage(_) => ErrorCategory::Grille,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ChunkTooLong { .. }
            | Self::IoError(_)
            | Self::SerializationError(_)
            | Self::TaskError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Grille => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidHoleToken { .. } => {
                "Write holes as space- or ';'-separated pairs, e.g. \"1,1 1,2 2,1 2,2\""
            }
            Self::InvalidHoleCoordinate { .. } => {
                "Check the coordinate base (1-based vs 0-based) and the grid size"
            }
            Self::InvalidGrilleSize { .. } => "Use a grid size between 1 and 256",
            Self::InvalidDirection { .. } => "Use 1 for clockwise or 0 for counterclockwise",
            Self::InvalidGrilleCoverage(_) => {
                "Rearrange the holes so the four rotations cover every cell exactly once"
            }
            Self::CiphertextLengthMismatch { .. } => {
                "Make sure the whole ciphertext was supplied and the grid size matches"
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file or flags and retry",
            Self::ChunkTooLong { .. } | Self::TaskError(_) => {
                "This is a bug in the cipher engine; please report it"
            }
            Self::IoError(_) => "Check that the input file or stream is readable",
            Self::SerializationError(_) => "Try the plain text output format",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidGrilleCoverage(report) => {
                format!("The grille is not valid. {}", report)
            }
            Self::CiphertextLengthMismatch { length, block_len } => format!(
                "The ciphertext has {} letters, which does not split into blocks of {}",
                length, block_len
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GrilleError>;
