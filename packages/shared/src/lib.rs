//! Utilities shared by the Kakehashi binaries.

pub mod logger;
