//! hashcheck core: SHA-256 digests of whole files and exact digest comparison.

pub mod config;
pub mod logging;

pub mod compare;
pub mod digest;
pub mod error;
pub mod session;
pub mod task;
