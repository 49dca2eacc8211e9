pub mod probe;
pub mod scanner;
pub mod service;

pub use probe::{DemoProbe, ProbeClient, TcpProbe};
pub use scanner::validator::{ValidatedRequest, validate};
pub use service::ScanService;
