// Dashboard view lifecycle - one fetch per mount, cancelled on unmount
use crate::application::dashboard_source::DashboardSource;
use crate::domain::error::FetchError;
use crate::domain::snapshot::DashboardSnapshot;
use crate::domain::view_state::ViewState;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A mounted dashboard view.
///
/// Mounting enters `Loading` and starts the single fetch in the background.
/// Dropping the view aborts that fetch if it has not resolved yet, so no
/// result is ever applied to a view that is gone.
pub struct DashboardView {
    state: ViewState,
    fetch: Option<JoinHandle<Result<DashboardSnapshot, FetchError>>>,
}

impl DashboardView {
    pub fn mount(source: Arc<dyn DashboardSource>) -> Self {
        tracing::debug!("Mounting dashboard view");
        let fetch = tokio::spawn(async move { source.fetch_snapshot().await });

        Self {
            state: ViewState::Loading,
            fetch: Some(fetch),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Wait for the fetch started at mount and apply its outcome.
    ///
    /// Calling this again after the view settled returns the same state.
    pub async fn settle(&mut self) -> &ViewState {
        if let Some(fetch) = self.fetch.as_mut() {
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Dashboard fetch task failed: {}", e);
                    Err(FetchError::Transport(String::new()))
                }
            };
            self.fetch = None;

            if let Err(e) = &outcome {
                tracing::warn!("Dashboard view errored: {}", e);
            }

            let state = std::mem::replace(&mut self.state, ViewState::Loading);
            self.state = state.settle(outcome);
            debug_assert!(self.state.is_settled());
        }

        &self.state
    }

    pub fn into_state(mut self) -> ViewState {
        std::mem::replace(&mut self.state, ViewState::Loading)
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            tracing::debug!("Unmounting dashboard view with fetch in flight, aborting");
            fetch.abort();
        }
    }
}
