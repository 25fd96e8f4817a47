pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod report;
pub mod source;
pub mod storage;

#[cfg(test)]
mod tests;
