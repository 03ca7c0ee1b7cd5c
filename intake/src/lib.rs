pub mod commands;
pub mod environment;
