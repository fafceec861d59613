use crate::core::MessageSource;
use crate::utils::error::Result;
use tokio::io::AsyncReadExt;

/// A message given directly on the command line or in a config file.
#[derive(Debug, Clone)]
pub struct InlineMessage {
    text: String,
}

impl InlineMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl MessageSource for InlineMessage {
    async fn read_message(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Reads the whole of standard input as the message.
#[derive(Debug, Clone, Default)]
pub struct StdinMessage;

impl MessageSource for StdinMessage {
    async fn read_message(&self) -> Result<String> {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        tracing::debug!("Read {} bytes from stdin", text.len());
        Ok(text)
    }
}
