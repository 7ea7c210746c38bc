//! Derivation and rendering of the brightness status line

pub mod format;
pub mod provider;
pub mod reading;
pub mod theme;

pub use provider::*;
pub use theme::Theme;

#[cfg(test)]
mod test;
