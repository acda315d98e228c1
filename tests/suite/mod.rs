//! Integration test suite modules.

mod generator;
mod patterns;
mod session;
