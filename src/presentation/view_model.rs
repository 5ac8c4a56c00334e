// View models derived from a loaded snapshot
use crate::domain::snapshot::{DailyStat, DashboardSnapshot, RecentCall};

pub const PAGE_SIZE: usize = 10;
pub const STAR_SLOTS: u8 = 5;
/// Top of the fixed call-volume axis; the axis always spans 0..=Y_AXIS_MAX.
pub const Y_AXIS_MAX: f64 = 10.0;
const Y_AXIS_STEPS: usize = 4;

/// Everything the loaded page shows, derived from one snapshot
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub cards: Vec<StatCard>,
    pub chart: CallVolumeChart,
    pub table: RecentCallsTable,
}

impl DashboardPage {
    pub fn new(snapshot: &DashboardSnapshot, requested_page: usize) -> Self {
        Self {
            cards: StatCard::summary(snapshot),
            chart: CallVolumeChart::new(&snapshot.daily_stats),
            table: RecentCallsTable::new(&snapshot.recent_calls, requested_page),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "text-emerald-500",
            Trend::Down => "text-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change_text: String,
    pub trend: Trend,
}

impl StatCard {
    pub fn new(title: &'static str, value: String, change: f64) -> Self {
        // Zero is not an improvement, so it shares the negative style
        let trend = if change > 0.0 { Trend::Up } else { Trend::Down };
        Self {
            title,
            value,
            change_text: change_text(change),
            trend,
        }
    }

    pub fn summary(snapshot: &DashboardSnapshot) -> Vec<StatCard> {
        vec![
            StatCard::new(
                "Total Calls",
                snapshot.total_calls.to_string(),
                snapshot.total_calls_change,
            ),
            StatCard::new(
                "Appointments Booked",
                snapshot.appointments_booked.to_string(),
                snapshot.appointments_change,
            ),
            StatCard::new(
                "Avg. Call Duration",
                snapshot.avg_call_duration.clone(),
                snapshot.avg_call_duration_change,
            ),
            StatCard::new(
                "Average Rating",
                format_one_decimal(snapshot.avg_rating),
                snapshot.avg_rating_change,
            ),
        ]
    }

    pub fn change_class(&self) -> &'static str {
        self.trend.css_class()
    }
}

fn change_text(change: f64) -> String {
    let sign = if change > 0.0 {
        "+"
    } else if change < 0.0 {
        "-"
    } else {
        ""
    };
    format!("{}{}% from last week", sign, format_number(change.abs()))
}

/// One decimal place, ties rounded away from zero (4.25 -> "4.3")
fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Integral values print without a fractional part ("5", not "5.0")
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    /// Offset from the top of the plot area, in percent
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub day: String,
    pub calls: u32,
    /// Horizontal position in percent of the plot width
    pub x: f64,
    /// Vertical position in percent from the top; below 0 when calls exceed the axis
    pub y: f64,
}

impl ChartPoint {
    pub fn tooltip(&self) -> String {
        format!("{}\ncalls: {}", self.day, self.calls)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallVolumeChart {
    pub ticks: Vec<AxisTick>,
    pub points: Vec<ChartPoint>,
}

impl CallVolumeChart {
    pub fn new(daily_stats: &[DailyStat]) -> Self {
        let ticks = (0..=Y_AXIS_STEPS)
            .map(|i| {
                let value = Y_AXIS_MAX - (Y_AXIS_MAX / Y_AXIS_STEPS as f64) * i as f64;
                AxisTick {
                    label: format_number(value),
                    top: (i as f64 * 100.0) / Y_AXIS_STEPS as f64,
                }
            })
            .collect();

        let last = daily_stats.len().saturating_sub(1);
        let points = daily_stats
            .iter()
            .enumerate()
            .map(|(index, stat)| ChartPoint {
                day: stat.weekday_label(),
                calls: stat.calls,
                x: if last == 0 {
                    0.0
                } else {
                    (index as f64 / last as f64) * 100.0
                },
                y: 100.0 - (stat.calls as f64 / Y_AXIS_MAX) * 100.0,
            })
            .collect();

        Self { ticks, points }
    }

    /// SVG path through the points in day order, in a 0..100 viewBox
    pub fn path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{} {:.2} {:.2}", command, p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True when some day has more calls than the fixed axis can show
    pub fn overflows(&self) -> bool {
        self.points.iter().any(|p| p.y < 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallTypeBadge {
    Inquiry,
    Complaint,
    Other,
}

impl CallTypeBadge {
    pub fn for_call_type(call_type: &str) -> Self {
        match call_type {
            "Inquiry" => CallTypeBadge::Inquiry,
            "Complaint" => CallTypeBadge::Complaint,
            _ => CallTypeBadge::Other,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CallTypeBadge::Inquiry => "bg-blue-50 text-blue-600 border border-blue-200",
            CallTypeBadge::Complaint => "bg-red-50 text-red-600 border border-red-200",
            CallTypeBadge::Other => "bg-gray-50 text-gray-600 border border-gray-200",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentBadge {
    Booked,
    NotBooked,
}

impl AppointmentBadge {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentBadge::Booked => "Booked",
            AppointmentBadge::NotBooked => "Not Booked",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            AppointmentBadge::Booked => "text-emerald-600",
            AppointmentBadge::NotBooked => "text-red-600",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            AppointmentBadge::Booked => "bg-emerald-500",
            AppointmentBadge::NotBooked => "bg-red-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarSlot {
    pub filled: bool,
}

impl StarSlot {
    pub fn css_class(&self) -> &'static str {
        if self.filled {
            "text-yellow-400"
        } else {
            "text-gray-200"
        }
    }
}

/// Slot `s` (1-based) is filled when `s <= rating`; a missing rating fills none
pub fn star_slots(rating: Option<f64>) -> Vec<StarSlot> {
    let rating = rating.unwrap_or(0.0);
    (1..=STAR_SLOTS)
        .map(|slot| StarSlot {
            filled: f64::from(slot) <= rating,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallRow {
    pub number: String,
    pub duration: String,
    pub call_type: String,
    pub call_type_badge: CallTypeBadge,
    pub appointment: AppointmentBadge,
    pub stars: Vec<StarSlot>,
}

impl CallRow {
    pub fn new(call: &RecentCall) -> Self {
        let appointment = if call.is_booked() {
            AppointmentBadge::Booked
        } else {
            AppointmentBadge::NotBooked
        };

        Self {
            number: call.number.clone(),
            duration: call.duration.clone(),
            call_type: call.call_type.clone(),
            call_type_badge: CallTypeBadge::for_call_type(&call.call_type),
            appointment,
            stars: star_slots(call.rating),
        }
    }

    pub fn filled_stars(&self) -> usize {
        self.stars.iter().filter(|s| s.filled).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// 1-based
    pub current: usize,
    pub total_pages: usize,
}

impl Pager {
    /// The requested page is clamped into the valid range
    pub fn new(total_rows: usize, requested_page: usize) -> Self {
        let total_pages = total_rows.div_ceil(PAGE_SIZE);
        let current = requested_page.clamp(1, total_pages.max(1));
        Self {
            current,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn previous_page(&self) -> usize {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        (self.current + 1).min(self.total_pages.max(1))
    }

    /// Controls are only shown when there is more than one page
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn row_range(&self, total_rows: usize) -> std::ops::Range<usize> {
        let start = ((self.current - 1) * PAGE_SIZE).min(total_rows);
        let end = (self.current * PAGE_SIZE).min(total_rows);
        start..end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentCallsTable {
    pub rows: Vec<CallRow>,
    pub pager: Pager,
    /// Placeholder of the search box; the box does not filter rows
    pub search_placeholder: &'static str,
}

impl RecentCallsTable {
    pub fn new(calls: &[RecentCall], requested_page: usize) -> Self {
        let pager = Pager::new(calls.len(), requested_page);
        let rows = calls[pager.row_range(calls.len())]
            .iter()
            .map(CallRow::new)
            .collect();

        Self {
            rows,
            pager,
            search_placeholder: "Search by phone number...",
        }
    }
}
