pub mod api;
pub mod config;
pub mod domain;
pub mod forms;
pub mod infrastructure;
pub mod models;
pub mod repl;
pub mod services;
pub mod views;

#[cfg(test)]
mod test_support;
