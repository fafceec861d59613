pub mod block_codec;
pub mod engine;
pub mod message;
pub mod padding;
pub mod rotation;
pub mod validator;

pub use crate::domain::model::{Block, CipherOutput, Grille, Mode, Position, RotationDirection};
pub use crate::domain::ports::{ConfigProvider, MessageSource};
pub use crate::utils::error::Result;
