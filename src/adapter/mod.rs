pub mod config;
pub mod init;
pub mod telemetry;
pub mod web;
