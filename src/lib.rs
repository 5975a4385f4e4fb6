// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod config;
pub mod leaderboard;
pub mod metrics;
pub mod passage;
pub mod runtime;
pub mod score_log;
pub mod session;
