/// find-heavy-dirs CLI: argument parsing and report rendering.
///
/// This crate contains all terminal-facing code. Business logic lives in
/// `heavydirs-core`.
pub mod app;
pub mod cli;
pub mod render;

pub use app::run;
pub use cli::{Args, OutputFormat};
