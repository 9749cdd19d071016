//! Command modules for the joost CLI.
//!
//! Each subcommand lives in its own file and follows the same pattern:
//! an `*Args` struct and a `*Command` handler implementing
//! [`traits::Command`], built from its args and its `joost.toml` table.

pub mod common;
pub mod traits;

pub mod cfg;
pub mod check;
pub mod fixtures;

pub use cfg::{CfgArgs, CfgCommand};
pub use check::{CheckArgs, CheckCommand};
pub use fixtures::{FixturesArgs, FixturesCommand};
