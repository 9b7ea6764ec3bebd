//! One round of the expression dialogue, without any I/O

mod core;
mod errors;
mod report;

pub use self::core::{Session, SessionOptions};
pub use errors::SessionError;
pub use report::{Report, Value, format_general};

#[cfg(test)]
mod tests;
