//! Reading input documents.

use std::io::Read;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, instrument};
use vellum_error::{StorageError, StorageErrorKind, VellumResult};

/// Read a text or markdown document.
///
/// PDF extraction is not supported; `.pdf` files are rejected.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_document(path: impl AsRef<Path>) -> VellumResult<String> {
    let path = path.as_ref();

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        return Err(StorageError::new(StorageErrorKind::UnsupportedInput(format!(
            "{} is a PDF; extract its text first",
            path.display()
        )))
        .into());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
    })?;
    debug!(chars = contents.len(), "Read document");
    non_empty(contents)
}

/// Read from `path` when given, otherwise all of standard input.
pub fn read_input(path: Option<&Path>) -> VellumResult<String> {
    match path {
        Some(path) => read_document(path),
        None => {
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents).map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!("stdin: {}", e)))
            })?;
            non_empty(contents)
        }
    }
}

fn non_empty(contents: String) -> VellumResult<String> {
    if contents.trim().is_empty() {
        Err(StorageError::new(StorageErrorKind::UnsupportedInput(
            "no content provided".to_string(),
        ))
        .into())
    } else {
        Ok(contents)
    }
}

/// Line that ends an interactive block.
pub const BLOCK_TERMINATOR: &str = ".";

/// One submission read by a [`BlockReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputBlock {
    /// Non-blank text, including its line breaks.
    Text(String),
    /// A terminator with nothing but whitespace before it.
    Blank,
}

/// Splits a line stream into blocks, each ended by a line holding a single
/// `.`. A non-blank block left open at end of input is still returned.
pub struct BlockReader<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> BlockReader<R> {
    /// Read blocks from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Next block, or `None` once input is exhausted.
    pub async fn next_block(&mut self) -> VellumResult<Option<InputBlock>> {
        let mut block = String::new();

        loop {
            let line = self.lines.next_line().await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!("input stream: {}", e)))
            })?;

            match line {
                Some(line) if line.trim() == BLOCK_TERMINATOR => {
                    return Ok(Some(if block.trim().is_empty() {
                        InputBlock::Blank
                    } else {
                        InputBlock::Text(block)
                    }));
                }
                Some(line) => {
                    block.push_str(&line);
                    block.push('\n');
                }
                None if block.trim().is_empty() => return Ok(None),
                None => {
                    debug!(chars = block.len(), "Input ended inside a block");
                    return Ok(Some(InputBlock::Text(block)));
                }
            }
        }
    }
}
