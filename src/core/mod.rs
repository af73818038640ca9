pub mod commands;
pub mod console;
pub mod identity;
pub mod state;

pub use commands::{Dispatcher, Flow, Registry};
pub use console::Console;
pub use state::ShellState;
