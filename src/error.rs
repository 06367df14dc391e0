//! Errors are carried by [`anyhow`]; this module only fixes the alias used across the crate
//! and renders a cause chain for the command line.

pub use anyhow::{Context, Error};
use std::backtrace::BacktraceStatus;

/// Convenient wrapper around `std::Result`.
pub type Result<T> = anyhow::Result<T>;

pub fn display(error: &Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));

  let backtrace = error.backtrace();
  if backtrace.status() == BacktraceStatus::Captured {
    msg.push_str(&format!("\n{}", backtrace));
  }
  eprintln!("{}", msg);
  msg
}
