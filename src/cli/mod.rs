//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod links;
pub mod render;

pub use args::{Cli, Commands, LinksArgs, RenderArgs, RenderFormat};
