use crate::core::message::MessageProcessor;
use crate::core::padding::strip_trailing_padding;
use crate::core::{ConfigProvider, MessageSource};
use crate::domain::model::{Block, CipherOutput, Mode};
use crate::utils::error::Result;
use std::sync::Arc;

pub const DEFAULT_WORKERS: usize = 4;

/// Runs a configured encryption or decryption, fanning blocks out over
/// blocking tasks. Output order always matches chunk order.
pub struct GrilleEngine<C: ConfigProvider, S: MessageSource> {
    config: C,
    source: S,
}

impl<C: ConfigProvider, S: MessageSource> GrilleEngine<C, S> {
    pub fn new(config: C, source: S) -> Self {
        Self { config, source }
    }

    pub async fn run(&self) -> Result<CipherOutput> {
        let grille = self.config.grille()?;
        tracing::info!(
            "Validating {}x{} grille ({}, {} holes)",
            grille.size,
            grille.size,
            grille.direction,
            grille.holes.len()
        );
        let processor = Arc::new(MessageProcessor::new(grille)?);
        tracing::info!("Grille validated OK");

        let message = self.source.read_message().await?;
        let workers = self.config.workers();

        let mut output = match self.config.mode() {
            Mode::Encrypt => encrypt_concurrent(Arc::clone(&processor), &message, workers).await?,
            Mode::Decrypt => decrypt_concurrent(Arc::clone(&processor), &message, workers).await?,
        };

        if self.config.mode() == Mode::Decrypt && self.config.strip_padding() {
            let block_len = processor.grille().block_len();
            output.text = strip_trailing_padding(&output.text, block_len, processor.pad());
            tracing::debug!("Trailing padding stripped, {} chars remain", output.text.len());
        }

        tracing::info!(
            "{:?} finished: {} block(s), {} chars",
            self.config.mode(),
            output.blocks.len(),
            output.text.chars().count()
        );
        Ok(output)
    }
}

pub async fn encrypt_concurrent(
    processor: Arc<MessageProcessor>,
    message: &str,
    workers: usize,
) -> Result<CipherOutput> {
    let chunks = processor.plaintext_chunks(message);
    run_batches(processor, chunks, workers, MessageProcessor::encode_chunk).await
}

pub async fn decrypt_concurrent(
    processor: Arc<MessageProcessor>,
    ciphertext: &str,
    workers: usize,
) -> Result<CipherOutput> {
    let blocks = processor.ciphertext_blocks(ciphertext)?;
    run_batches(processor, blocks, workers, MessageProcessor::decode_chunk).await
}

/// Splits `units` into at most `workers` contiguous batches and joins them back in order.
async fn run_batches<F>(
    processor: Arc<MessageProcessor>,
    units: Vec<Vec<char>>,
    workers: usize,
    op: F,
) -> Result<CipherOutput>
where
    F: Fn(&MessageProcessor, &[char]) -> Result<(String, Block)> + Copy + Send + 'static,
{
    let per_task = units.len().div_ceil(workers.max(1)).max(1);
    let mut handles = Vec::new();
    for batch in units.chunks(per_task) {
        let batch = batch.to_vec();
        let processor = Arc::clone(&processor);
        handles.push(tokio::task::spawn_blocking(move || {
            batch
                .iter()
                .map(|unit| op(processor.as_ref(), unit.as_slice()))
                .collect::<Result<Vec<_>>>()
        }));
    }
    tracing::debug!("Dispatched {} block(s) over {} task(s)", units.len(), handles.len());

    let mut output = CipherOutput::empty();
    for handle in handles {
        for (text, matrix) in handle.await?? {
            output.push(text, matrix);
        }
    }
    Ok(output)
}
