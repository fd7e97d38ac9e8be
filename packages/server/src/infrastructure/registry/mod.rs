//! 接続集合の実装

pub mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;
