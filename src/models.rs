use serde::Serialize;
use url::form_urlencoded;

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error loading content. Please try again.";

/// Routes the content server renders fragments for.
pub const KNOWN_TABS: [&str; 5] = [
    "statistics",
    "top-artists",
    "top-tracks",
    "playlists",
    "recentlyplayed",
];

pub const KNOWN_TIME_PERIODS: [&str; 3] = ["short_term", "medium_term", "long_term"];

pub fn is_known_tab(tab: &str) -> bool {
    KNOWN_TABS.contains(&tab)
}

pub fn is_known_time_period(period: &str) -> bool {
    KNOWN_TIME_PERIODS.contains(&period)
}

/// Query string sent with every fragment request. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentQuery<'a> {
    pub fragment: bool,
    pub time_period: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRequest {
    pub seq: u64,
    pub tab: String,
    pub time_period: String,
}

impl FragmentRequest {
    pub fn new(seq: u64, tab: impl Into<String>, time_period: impl Into<String>) -> Self {
        Self {
            seq,
            tab: tab.into(),
            time_period: time_period.into(),
        }
    }

    /// The tab is substituted as-is, without escaping.
    pub fn path(&self) -> String {
        format!("/{}", self.tab)
    }

    pub fn query(&self) -> FragmentQuery<'_> {
        FragmentQuery {
            fragment: true,
            time_period: &self.time_period,
        }
    }

    /// Same encoding `reqwest` applies to [`FragmentRequest::query`].
    pub fn path_and_query(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("fragment", "true")
            .append_pair("time_period", &self.time_period)
            .finish();
        format!("/{}?{query}", self.tab)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionContent {
    Loading,
    Fragment(String),
    Error,
}

impl RegionContent {
    pub fn markup(&self) -> String {
        match self {
            RegionContent::Loading => notice(LOADING_TEXT),
            RegionContent::Fragment(body) => body.clone(),
            RegionContent::Error => notice(ERROR_TEXT),
        }
    }

    pub fn text(&self) -> Option<&'static str> {
        match self {
            RegionContent::Loading => Some(LOADING_TEXT),
            RegionContent::Fragment(_) => None,
            RegionContent::Error => Some(ERROR_TEXT),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionContent::Loading => "loading",
            RegionContent::Fragment(_) => "fragment",
            RegionContent::Error => "error",
        }
    }
}

fn notice(text: &str) -> String {
    format!(r#"<div class="text2">{text}</div>"#)
}
