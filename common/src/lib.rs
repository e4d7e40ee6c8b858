//! # ipfilter common
//!
//! Shared models and helpers used by the rest of the workspace.
//!
//! * **[`network`]**: the IPv4 [`network::address::Address`] model, its parser,
//!   the prefix / any-component matchers and stable filters over sorted lists.
//! * **[`utils`]**: text helpers (field splitting).
//! * **[`config`]**: runtime options handed down from the command line.

pub mod config;
pub mod network;
pub mod utils;
