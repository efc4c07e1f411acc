//! Loggers that bridge to other consumers and producers of log lines

pub mod line_parser;
pub mod test_log;

pub use line_parser::{parse_line, LineParser};
pub use test_log::{with_test_sink, CaptureSink, PrintSink, TestLogger, TestSink};
