// Command handlers module
pub mod process;

pub use process::execute as process;
