pub mod process;

pub use process::ProcessCommand;
