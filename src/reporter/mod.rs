//! Report rendering over the audit and fix output contracts.

pub mod console;
pub mod json;
pub mod markdown;

pub use console::ConsoleReporter;
