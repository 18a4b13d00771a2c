//! Conversational model backend.
//!
//! The session protocol is an external collaborator; everything else in the
//! crate talks to it through [`ModelClient`].

use crate::error::Result;

pub mod proxy;

pub use proxy::ProxyChatClient;

/// One request, one completion.
pub trait ModelClient {
    fn send_prompt(&self, prompt: &str) -> Result<String>;
}
