pub mod config;
pub mod error;
pub mod flags;
pub mod logging;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod parse;
pub mod process;

#[cfg(test)]
mod test_support;
