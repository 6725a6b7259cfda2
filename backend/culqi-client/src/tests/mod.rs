mod client;
mod config;
mod credentials;
mod error;
mod query;
