// Application layer - Data source contract and view lifecycle
pub mod dashboard_source;
pub mod dashboard_view;
