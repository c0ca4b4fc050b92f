//! Operator session - read, dispatch, render until exit

use crate::application::errors::AppError;
use crate::domain::entities::CommandKind;
use crate::domain::traits::Frontend;
use super::dispatcher::{CommandDispatcher, Reply};

/// Drives one operator session over a `Frontend`
pub struct Session<F: Frontend> {
    frontend: F,
    dispatcher: CommandDispatcher,
    prompt: String,
    greeting: bool,
}

impl<F: Frontend> Session<F> {
    pub fn new(frontend: F, dispatcher: CommandDispatcher) -> Self {
        Self {
            frontend,
            dispatcher,
            prompt: "> ".to_string(),
            greeting: false,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Show a welcome banner before the first prompt
    pub fn with_greeting(mut self) -> Self {
        self.greeting = true;
        self
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Run until `exit` or end of input. Command failures never end the loop.
    pub async fn run(&mut self) -> Result<(), AppError> {
        self.frontend.start().await?;
        tracing::info!("Session started on {}", self.frontend.info().name);

        if self.greeting {
            let banner = format!("Welcome to the {}!", self.dispatcher.name());
            let commands: Vec<&str> = CommandKind::ALL.iter().map(|k| k.name()).collect();
            self.frontend.send_message(&banner).await?;
            self.frontend.send_message(&format!("Commands: {}", commands.join(", "))).await?;
        }

        loop {
            let Some(line) = self.frontend.read_line(&self.prompt).await? else {
                tracing::info!("Input closed, ending session");
                break;
            };

            let Some(reply) = self.dispatcher.dispatch_line(&line) else {
                continue;
            };

            let exit = reply.is_exit();
            self.render(reply).await?;
            if exit {
                tracing::info!("Session ended by operator");
                break;
            }
        }
        Ok(())
    }

    async fn render(&mut self, reply: Reply) -> Result<(), AppError> {
        match reply {
            Reply::Text(text) => self.frontend.send_message(&text).await?,
            Reply::List { heading, items } => {
                self.frontend.send_message(&heading).await?;
                for item in items {
                    self.frontend.send_message(&item).await?;
                }
            }
            Reply::Warning(text) => self.frontend.send_warning(&text).await?,
            Reply::Exit(text) => self.frontend.send_message(&text).await?,
        }
        Ok(())
    }
}
