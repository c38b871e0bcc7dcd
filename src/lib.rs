pub mod api;
pub mod cli_args;
pub mod constants;
pub mod error;
pub mod feed;
pub mod models;
pub mod render;
pub mod settings;
