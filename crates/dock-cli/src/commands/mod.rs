//! Command handlers, one module per command group.

pub mod categories;
pub mod init;
pub mod items;
pub mod misc;
pub mod notes;
pub mod shortcuts;
pub mod tabs;
pub mod transfer;
