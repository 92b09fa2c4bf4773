// <crate>/tests signals to Cargo that files inside of it are integration tests.
// Every test module is included from a single integration test binary to
// keep compile times down; this library holds what they share.

pub mod node;
pub mod setup;
