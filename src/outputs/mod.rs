//! Output capability implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleOutput;
pub use file::FileOutput;
pub use memory::MemoryOutput;
