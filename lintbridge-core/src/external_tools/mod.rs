//! External Tool Integration
//!
//! Narrow interfaces over the processes this adapter drives: the ESLint
//! binary itself and the version-control diff snapshot. Everything behind
//! these seams is replaceable in tests.

pub mod eslint;
pub mod git;
