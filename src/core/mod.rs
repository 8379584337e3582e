pub mod app;
pub mod cli;
pub mod config;
pub mod math;
pub mod node;
pub mod parse;
pub mod paths;
