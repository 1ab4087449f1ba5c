//! Smoke-test execution: sampling and the sequential request loop.
mod runner;
mod sampler;


pub use runner::run_tests;
