pub mod reporter;
pub mod sink;

pub use reporter::{build_finding, URL_PLACEHOLDER};
pub use sink::{CollectorSink, Diagnostics, IssueSink, MemoryDiagnostics, TracingDiagnostics};
