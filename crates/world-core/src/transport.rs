//! Remote command transport.
//!
//! The only remote capability is `execute`: send one plain-text command,
//! get back one plain-text reply. [`RconClient`] implements this over
//! the Source RCON framing: little-endian length, request id, and packet
//! type, then a NUL-terminated body and one trailing NUL.

use std::io::{Read, Write};
use std::net::TcpStream;

use thiserror::Error;

use crate::error::{Error, Result};

/// Environment fallback for the server address.
pub const ENV_ADDRESS: &str = "WORLDCTL_ADDRESS";
/// Environment fallback for the RCON password.
pub const ENV_PASSWORD: &str = "WORLDCTL_PASSWORD";

const PACKET_AUTH: i32 = 3;
const PACKET_EXEC: i32 = 2;
const AUTH_FAILED_ID: i32 = -1;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("authentication rejected by server")]
    AuthRejected,

    #[error("malformed packet: {0}")]
    Protocol(String),

    #[error("response carried id {got}, expected {want}")]
    IdMismatch { want: i32, got: i32 },
}

/// One command in, one reply out. `&mut self` because the underlying
/// connection allows a single in-flight request.
pub trait CommandExecutor {
    fn execute(&mut self, command: &str) -> std::result::Result<String, TransportError>;
}

/// Where and how to reach the server. Explicit values win; `None`
/// falls back to the environment.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub address: String,
    pub password: String,
}

impl ConnectionConfig {
    pub fn resolve(address: Option<String>, password: Option<String>) -> Result<Self> {
        Ok(Self {
            address: resolve_field(address, ENV_ADDRESS, "address")?,
            password: resolve_field(password, ENV_PASSWORD, "password")?,
        })
    }
}

fn resolve_field(explicit: Option<String>, env_key: &str, name: &str) -> Result<String> {
    let value = match explicit {
        Some(value) => value,
        None => std::env::var(env_key).unwrap_or_default(),
    };
    if value.trim().is_empty() {
        return Err(Error::validation(format!(
            "{name} must be set in the configuration or via {env_key}"
        )));
    }
    Ok(value)
}

/// Blocking RCON client over TCP.
pub struct RconClient {
    stream: TcpStream,
    next_id: i32,
}

impl RconClient {
    /// Connect and authenticate.
    pub fn connect(config: &ConnectionConfig) -> std::result::Result<Self, TransportError> {
        let stream = TcpStream::connect(&config.address)?;
        let mut client = Self { stream, next_id: 0 };
        client.authenticate(&config.password)?;
        Ok(client)
    }

    fn authenticate(&mut self, password: &str) -> std::result::Result<(), TransportError> {
        let id = self.send(PACKET_AUTH, password)?;
        let (reply_id, _) = self.receive()?;
        if reply_id == AUTH_FAILED_ID {
            return Err(TransportError::AuthRejected);
        }
        if reply_id != id {
            return Err(TransportError::IdMismatch {
                want: id,
                got: reply_id,
            });
        }
        Ok(())
    }

    fn send(&mut self, packet_type: i32, body: &str) -> std::result::Result<i32, TransportError> {
        self.next_id = self.next_id.wrapping_add(1).max(1);
        let id = self.next_id;

        // length counts id + type + body + two NULs, not itself
        let length = (body.len() + 10) as i32;
        let mut packet = Vec::with_capacity(body.len() + 14);
        packet.extend_from_slice(&length.to_le_bytes());
        packet.extend_from_slice(&id.to_le_bytes());
        packet.extend_from_slice(&packet_type.to_le_bytes());
        packet.extend_from_slice(body.as_bytes());
        packet.extend_from_slice(&[0, 0]);

        self.stream.write_all(&packet)?;
        Ok(id)
    }

    fn receive(&mut self) -> std::result::Result<(i32, String), TransportError> {
        let length = self.read_i32()?;
        if !(10..=4106).contains(&length) {
            return Err(TransportError::Protocol(format!(
                "response length {length} out of range"
            )));
        }
        let id = self.read_i32()?;
        let _packet_type = self.read_i32()?;

        let mut body = vec![0u8; length as usize - 8];
        self.stream.read_exact(&mut body)?;
        // strip the body NUL and the trailing packet NUL
        while body.last() == Some(&0) {
            body.pop();
        }
        Ok((id, String::from_utf8_lossy(&body).into_owned()))
    }

    fn read_i32(&mut self) -> std::result::Result<i32, TransportError> {
        let mut buf = [0u8; 4];
        self.stream.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }
}

impl CommandExecutor for RconClient {
    fn execute(&mut self, command: &str) -> std::result::Result<String, TransportError> {
        let id = self.send(PACKET_EXEC, command)?;
        let (reply_id, body) = self.receive()?;
        if reply_id == AUTH_FAILED_ID {
            return Err(TransportError::AuthRejected);
        }
        if reply_id != id {
            return Err(TransportError::IdMismatch {
                want: id,
                got: reply_id,
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_missing_values() {
        let err = ConnectionConfig::resolve(Some("  ".to_string()), Some("hunter2".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("address"));
    }

    #[test]
    fn config_accepts_explicit_values() {
        let config = ConnectionConfig::resolve(
            Some("localhost:25575".to_string()),
            Some("hunter2".to_string()),
        )
        .unwrap();
        assert_eq!(config.address, "localhost:25575");
        assert_eq!(config.password, "hunter2");
    }
}
