// ABOUTME: Library root for dockmate - typed client for a remote docker panel.
// ABOUTME: The CLI binary is in main.rs.

pub mod api;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod types;

pub use api::ContainerApi;
pub use dispatch::{Dispatcher, HttpDispatcher};
