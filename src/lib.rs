pub mod api;
pub mod config;
pub mod construct;
pub mod distance;
pub mod error;
pub mod export;
pub mod loader;
pub mod optimizer;
pub mod route;
