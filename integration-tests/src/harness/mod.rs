pub mod session;
pub mod tracing;

pub use session::{CertDir, Scenario, SetupRun, run_setup};
pub use tracing::{CapturedEvent, init_test_tracing};
