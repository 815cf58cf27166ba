//! Cron jobs for automated tasks.

pub mod media_posting;
