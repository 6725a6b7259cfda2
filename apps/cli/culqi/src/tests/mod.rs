mod cli;
mod config;
mod logger;
