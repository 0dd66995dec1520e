pub mod common;
pub mod extract;
pub mod providers;
pub mod status;
pub mod wait;
