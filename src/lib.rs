//! Live terminal system monitor sampling CPU, memory and processes from procfs.

pub mod action;
pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod logging;
pub mod system;
pub mod ui;
