//! API request handlers.

pub mod agents;
pub mod chat;
pub mod health;
pub mod orchestrate;
pub mod speech;

pub use agents::*;
pub use chat::*;
pub use health::*;
pub use orchestrate::*;
pub use speech::*;
