//! Turning-grille cipher engine.
//!
//! A grille of size N has holes that, over four quarter turns, must expose
//! every cell of the N×N grid exactly once. Plaintext is written through
//! the holes one generation at a time and read off row by row; decryption
//! walks the same holes to recover it.
//!
//! ```
//! use turning_grille::{Grille, MessageProcessor, Position, RotationDirection};
//!
//! let holes = vec![
//!     Position::new(0, 0),
//!     Position::new(0, 1),
//!     Position::new(1, 0),
//!     Position::new(1, 1),
//! ];
//! let processor =
//!     MessageProcessor::new(Grille::new(4, RotationDirection::Clockwise, holes)).unwrap();
//!
//! let cipher = processor.encrypt("hello world").unwrap();
//! assert_eq!(cipher.text, "HEOWLLORXXLDXXXX");
//! assert_eq!(processor.decrypt(&cipher.text).unwrap().text, "HELLOWORLDXXXXXX");
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::{InlineMessage, StdinMessage};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    engine::GrilleEngine,
    message::MessageProcessor,
    validator::{CoverageReport, ValidatedGrille},
};
pub use crate::domain::model::{
    Block, CipherOutput, Grille, HoleBase, Mode, Position, RotationDirection, PAD_CHAR,
};
pub use crate::utils::error::{GrilleError, Result};
