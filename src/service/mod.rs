//! Business logic orchestration between the Discord adapter and storage.

pub mod caption;
pub mod posting;
pub mod scan;
