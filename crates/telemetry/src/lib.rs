//! Process logging for the admin tool.
//!
//! Informational records route to stdout, warnings and errors to stderr,
//! and bearer-token-like substrings are masked before any line reaches a
//! stream.

pub mod format;
pub mod logging;
pub mod redact;

pub use format::AdminFormatter;
pub use logging::{init_logging, init_logging_from_env, LoggingConfig};
pub use redact::{mask_tokens, TOKEN_MASK, TOKEN_PREFIX};
