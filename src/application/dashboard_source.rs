// Source trait for dashboard snapshots
use crate::domain::error::FetchError;
use crate::domain::snapshot::DashboardSnapshot;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch and decode one complete snapshot
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, FetchError>;

    /// Fetch the upstream success body untouched (used by the local proxy)
    async fn fetch_raw(&self) -> Result<Bytes, FetchError>;
}
