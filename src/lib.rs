//! Library entry point for the vsclean CLI.
//!
//! The core is [`walker::reclaim`]: it walks a tree, deletes every `bin`/`obj`
//! folder it meets and reports each attempt to a caller-supplied sink.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod path;
pub mod sizer;
pub mod walker;
