mod message;
mod status;

pub use message::ExtractedMessage;
pub use status::Status;
