pub mod finding;
pub mod request;
pub mod response;
pub mod service;

pub use finding::{Confidence, Finding, Severity};
pub use request::BaseRequest;
pub use response::ProbeResult;
pub use service::TargetService;
