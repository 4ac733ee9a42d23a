pub mod reserve_config;
pub mod reserve_snapshot;
pub mod reserve_state;
