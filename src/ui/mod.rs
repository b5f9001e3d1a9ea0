//! UI layer: shared components, section blocks, pages, theme, icons.

pub mod common;
pub mod icon;
pub mod pages;
pub mod sections;
pub mod theme;

pub use icon::{Icon, icons};
