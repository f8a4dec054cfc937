pub mod runner;
pub mod transport;

pub use runner::ProbeRunner;
pub use transport::{HttpTransport, Transport};
