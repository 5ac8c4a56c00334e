// HTML templates for the three view states
//
// A page goes out in two chunks: the document head with the fragment for the
// state at mount (the spinner), then the fragment for the settled state
// followed by a script that removes the spinner.
use crate::domain::view_state::ViewState;
use crate::presentation::view_model::DashboardPage;
use askama::Template;

pub const PAGE_TITLE: &str = "Serena AI Agent Dashboard";

const PAGE_CLOSE: &str = r#"<script>document.getElementById("view-loading")?.remove();</script>
</body>
</html>
"#;

#[derive(Template)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: &'static str,
    pub page: DashboardPage,
}

/// Fragment for whichever state the view is in
pub fn render_state_fragment(
    state: &ViewState,
    requested_page: usize,
) -> Result<String, askama::Error> {
    match state {
        ViewState::Loading => LoadingTemplate {}.render(),
        ViewState::Errored(message) => ErrorTemplate {
            message: message.clone(),
        }
        .render(),
        ViewState::Loaded(snapshot) => DashboardTemplate {
            title: PAGE_TITLE,
            page: DashboardPage::new(snapshot, requested_page),
        }
        .render(),
    }
}

/// First chunk: document head plus the fragment for the state at mount
pub fn render_page_open(state: &ViewState) -> Result<String, askama::Error> {
    let mut html = ShellTemplate { title: PAGE_TITLE }.render()?;
    html.push_str(&render_state_fragment(state, 1)?);
    Ok(html)
}

/// Last chunk: the settled fragment, then the document end
pub fn render_page_close(state: &ViewState, requested_page: usize) -> Result<String, askama::Error> {
    let mut html = render_state_fragment(state, requested_page)?;
    html.push_str(PAGE_CLOSE);
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::{Appointment, DailyStat, DashboardSnapshot, RecentCall};
    use std::sync::Arc;

    fn snapshot(calls: usize) -> DashboardSnapshot {
        DashboardSnapshot {
            total_calls: 57,
            total_calls_change: 5.0,
            appointments_booked: 12,
            appointments_change: -3.0,
            avg_call_duration: "3m 20s".to_string(),
            avg_call_duration_change: 1.5,
            avg_rating: 4.5,
            avg_rating_change: 2.0,
            daily_stats: vec![
                DailyStat {
                    date: "2024-01-15".to_string(),
                    calls: 2,
                    appointments: 1,
                    duration: 3.0,
                    rating: 4.0,
                },
                DailyStat {
                    date: "2024-01-16".to_string(),
                    calls: 4,
                    appointments: 1,
                    duration: 3.0,
                    rating: 4.0,
                },
            ],
            recent_calls: (1..=calls)
                .map(|i| RecentCall {
                    number: format!("555-{:04}", i),
                    call_type: if i % 2 == 0 { "Complaint" } else { "Inquiry" }.to_string(),
                    appointment: Appointment::Text("Yes".to_string()),
                    rating: Some(3.0),
                    duration: "2m".to_string(),
                })
                .collect(),
        }
    }

    fn loaded(calls: usize, page: usize) -> String {
        render_state_fragment(&ViewState::Loaded(Arc::new(snapshot(calls))), page).unwrap()
    }

    #[test]
    fn test_page_open_shows_spinner() {
        let html = render_page_open(&ViewState::Loading).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("Loading dashboard data..."));
        assert!(html.contains(r#"id="view-loading""#));
        assert!(!html.contains("</html>"));
    }

    #[test]
    fn test_page_close_removes_spinner() {
        let html = render_page_close(&ViewState::Errored("boom".to_string()), 1).unwrap();
        assert!(html.contains(r#"data-state="error""#));
        assert!(html.contains(r#"getElementById("view-loading")"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_error_fragment() {
        let html = render_state_fragment(
            &ViewState::Errored("API Error: 503 Service Unavailable".to_string()),
            1,
        )
        .unwrap();
        assert!(html.contains("Error Loading Dashboard"));
        assert!(html.contains("API Error: 503 Service Unavailable"));
        assert!(html.contains("window.location.reload()"));
        assert!(html.contains("Try Again"));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let html = render_state_fragment(
            &ViewState::Errored("<script>alert(1)</script>".to_string()),
            1,
        )
        .unwrap();
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn test_dashboard_fragment() {
        let html = loaded(23, 3);

        assert!(html.contains("+5% from last week"));
        assert!(html.contains("-3% from last week"));
        assert!(html.contains("3m 20s"));
        assert!(html.contains("4.5"));
        assert!(html.contains("M 0.00 80.00 L 100.00 60.00"));
        assert!(html.contains("Mon"));
        assert!(html.contains("Page 3 of 3"));
        assert!(html.contains("555-0021"));
        assert!(!html.contains("555-0020"));
        assert!(html.contains("?page=2"));
        assert!(html.contains("Search by phone number..."));
        assert_eq!(html.matches("call-row").count(), 3);
        assert_eq!(html.matches("text-yellow-400").count(), 9);
    }

    #[test]
    fn test_single_page_hides_pagination() {
        let html = loaded(4, 1);
        assert!(!html.contains("Previous"));
        assert!(!html.contains("Next"));
    }
}
