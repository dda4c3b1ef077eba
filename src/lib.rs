/// Arcadia - Character Creation Wizard (TUI Edition)
///
/// Core library providing the step-gated character builder, point
/// allocation, portrait handling and JSON sheet interchange for the
/// Arcadia tabletop RPG.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
