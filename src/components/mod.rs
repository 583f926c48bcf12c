//! UI components.

pub mod bloom;
