//! Route modules, one per top-level path

pub mod deleted;
pub mod index;
pub mod reader;
pub mod views;
pub mod writer;
