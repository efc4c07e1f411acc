//! Appender implementations

pub mod console;
pub mod file;
pub mod writer;

pub use console::{ConsoleAppender, ConsoleStream};
pub use file::FileAppender;
pub use writer::{ErrorCallback, WriterAppender};
