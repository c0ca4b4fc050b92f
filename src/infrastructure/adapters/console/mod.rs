//! Console adapter - stdin/stdout frontend for the interactive session

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use crate::domain::traits::{Frontend, FrontendInfo};
use crate::application::errors::AppError;

/// Console frontend reading commands line by line.
///
/// Input bytes that are not valid UTF-8 are replaced rather than rejected,
/// so a garbled line becomes an unknown command instead of ending the session.
pub struct ConsoleAdapter<R = BufReader<Stdin>, W = Stdout> {
    info: FrontendInfo,
    reader: R,
    writer: W,
    buf: Vec<u8>,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self::with_io(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> ConsoleAdapter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn with_io(reader: R, writer: W) -> Self {
        Self {
            info: FrontendInfo {
                name: "console".to_string(),
            },
            reader,
            writer,
            buf: Vec::new(),
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    async fn write_line(&mut self, text: &str) -> Result<(), AppError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<R, W> Frontend for ConsoleAdapter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn start(&mut self) -> Result<(), AppError> {
        tracing::debug!("Starting console frontend");
        Ok(())
    }

    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;

        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&self.buf);
        if line.contains(char::REPLACEMENT_CHARACTER) {
            tracing::debug!("Replaced invalid UTF-8 in input line");
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn send_message(&mut self, text: &str) -> Result<(), AppError> {
        self.write_line(text).await
    }

    async fn send_warning(&mut self, text: &str) -> Result<(), AppError> {
        self.write_line(&format!("Warning: {}", text)).await
    }

    fn info(&self) -> FrontendInfo {
        self.info.clone()
    }
}
