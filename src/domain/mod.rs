// Domain layer - Dashboard payload, fetch errors and view lifecycle states
pub mod error;
pub mod snapshot;
pub mod view_state;
