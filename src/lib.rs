//! Scores source snippets by running an external linter and style checker
//! over them, served over HTTP.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod server;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
