pub mod context;
pub mod detector;
pub mod mutation;
pub mod registry;

pub use context::ScanContext;
pub use detector::{run_as_task, run_sweep, Detector};
pub use mutation::mutate_paths;
pub use registry::{DetectorCtor, DetectorRegistry};
