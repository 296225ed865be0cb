pub mod amount;
pub mod blob;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod identity;
pub mod keys;
pub mod launcher;
pub mod submit;
