pub const DEFAULT_TAB: &str = "statistics";
pub const DEFAULT_TIME_PERIOD: &str = "short_term";

/// Tab and time period the page is currently showing.
///
/// Both fields are updated before a request is dispatched and are never
/// rolled back, so they always reflect the last selection even while the
/// fetch is still pending or after it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_tab: String,
    pub current_time_period: String,
}

impl SessionState {
    pub fn new(tab: impl Into<String>, time_period: impl Into<String>) -> Self {
        Self {
            current_tab: tab.into(),
            current_time_period: time_period.into(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_TAB, DEFAULT_TIME_PERIOD)
    }
}
