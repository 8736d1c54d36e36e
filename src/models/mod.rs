pub mod anchor;
pub mod message;
pub mod record;
pub mod window;

pub use anchor::Anchor;
pub use message::InboundMessage;
pub use record::ResultRecord;
pub use window::ResponseWindow;
