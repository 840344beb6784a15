//! Open folder connection profiles with an external launcher.
//!
//! [`data::resolve`] picks the launcher program, [`actions::spawn`] starts it
//! detached, and [`plugin::FolderPlugin`] wires both to a [`plugin::Host`].

pub mod actions;
pub mod app;
pub mod data;
pub mod error;
pub mod message;
pub mod plugin;
