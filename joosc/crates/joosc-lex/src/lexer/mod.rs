//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Main Scanner struct and dispatch
//! - `operator` - Operator and separator scanning
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Integer literal scanning
//! - `string` - String and character literal scanning

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Scanner;
