pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod lead;
pub mod pages;
pub mod showcase;
pub mod telemetry;
