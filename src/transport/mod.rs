pub mod applescript;

use anyhow::Result;

pub use applescript::AppleScriptTransport;

/// Fire-and-forget delivery of one text message.
///
/// `Ok` only means the send call completed; there is no delivery receipt.
pub trait MessageTransport {
    fn send(&self, recipient: &str, text: &str) -> Result<()>;
}
