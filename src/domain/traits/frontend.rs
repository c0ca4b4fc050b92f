use async_trait::async_trait;
use crate::application::errors::AppError;

/// Frontend trait - abstraction for the line-oriented operator interface
#[async_trait]
pub trait Frontend: Send {
    /// Prepare the frontend before the first prompt
    async fn start(&mut self) -> Result<(), AppError>;

    /// Read one input line. `None` means the input is exhausted.
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Show a line of regular output
    async fn send_message(&mut self, text: &str) -> Result<(), AppError>;

    /// Show a single warning line for a failed command
    async fn send_warning(&mut self, text: &str) -> Result<(), AppError>;

    /// Get frontend info
    fn info(&self) -> FrontendInfo;
}

/// Frontend information
#[derive(Debug, Clone)]
pub struct FrontendInfo {
    pub name: String,
}
