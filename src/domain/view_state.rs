// Render states of a mounted dashboard view
use crate::domain::error::FetchError;
use crate::domain::snapshot::DashboardSnapshot;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(Arc<DashboardSnapshot>),
    Errored(String),
}

impl ViewState {
    /// Apply the outcome of the view's single fetch.
    ///
    /// Only `Loading` moves; a settled state ignores further outcomes.
    pub fn settle(self, outcome: Result<DashboardSnapshot, FetchError>) -> ViewState {
        match self {
            ViewState::Loading => match outcome {
                Ok(snapshot) => ViewState::Loaded(Arc::new(snapshot)),
                Err(e) => ViewState::Errored(e.to_string()),
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }
}
