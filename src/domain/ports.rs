use crate::domain::model::{Grille, Mode};
use crate::utils::error::Result;

/// Where the message to transcode comes from.
pub trait MessageSource: Send + Sync {
    fn read_message(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Grille as configured; not yet validated.
    fn grille(&self) -> Result<Grille>;
    fn mode(&self) -> Mode;
    fn workers(&self) -> usize;
    fn strip_padding(&self) -> bool;
}
