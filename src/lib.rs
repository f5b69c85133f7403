pub mod command;
pub mod config;
pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod layout;
pub mod seg_tree;
pub mod session;
pub mod text_view;
