//! Persistence layer for the relay.
//!
//! Holds the worker system prompt that the self-improvement loop reads and
//! rewrites. File writes are atomic (write to temp file, then rename).
//!
//! # Example
//!
//! ```no_run
//! use relay_persistence::{FilePromptStore, PromptStore};
//!
//! let store = FilePromptStore::new("worker_prompt.txt");
//! store.save("You are a concise assistant.").unwrap();
//! assert_eq!(store.load().unwrap().as_deref(), Some("You are a concise assistant."));
//! ```

pub mod atomic;
pub mod error;
pub mod prompt_store;

pub use error::{PersistenceError, Result};
pub use prompt_store::{FilePromptStore, MemoryPromptStore, PromptStore, DEFAULT_PROMPT_FILE};
