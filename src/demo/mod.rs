// Demonstration harness
// Checks the fixed test vectors, then generates and exercises keys of increasing length

pub mod config;
pub mod harness;

pub use config::{DemoConfig, MAX_DEMO_LENGTH};
pub use harness::{check_key_pair, check_known_vectors, run_demo, KNOWN_VECTORS};
