//! Test doubles for the transport boundary.

use world_core::transport::{CommandExecutor, TransportError};

/// A transport that records every command and answers from a script.
///
/// Replies and failures are matched by substring against the outgoing
/// command; unmatched commands succeed with an empty reply, which is
/// what a quiet server sends for most write commands. Failed commands
/// are still recorded.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    sent: Vec<String>,
    replies: Vec<(String, String)>,
    failures: Vec<(String, String)>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands containing `needle` with `reply`.
    pub fn reply_with(mut self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.replies.push((needle.into(), reply.into()));
        self
    }

    /// Fail commands containing `needle` with an i/o error carrying
    /// `message`.
    pub fn fail_on(mut self, needle: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.push((needle.into(), message.into()));
        self
    }

    /// Every command executed so far, in order.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }
}

impl CommandExecutor for ScriptedTransport {
    fn execute(&mut self, command: &str) -> Result<String, TransportError> {
        self.sent.push(command.to_string());
        if let Some((_, message)) = self
            .failures
            .iter()
            .find(|(needle, _)| command.contains(needle.as_str()))
        {
            return Err(TransportError::Io(std::io::Error::other(message.clone())));
        }
        Ok(self
            .replies
            .iter()
            .find(|(needle, _)| command.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_default())
    }
}
