pub mod backend;
pub mod config;
pub mod handlers;
pub mod identity;
