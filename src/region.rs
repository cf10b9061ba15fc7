use crate::models::RegionContent;
use serde::Serialize;
use std::{fmt, str::FromStr, sync::Arc};
use tokio::sync::watch;

pub const DEFAULT_REGION_ID: &str = "content";

/// What to do with a response that is not for the most recently dispatched cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    #[default]
    LatestOnly,
    LastWriterWins,
}

impl ResponsePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponsePolicy::LatestOnly => "latest",
            ResponsePolicy::LastWriterWins => "last-writer-wins",
        }
    }
}

impl fmt::Display for ResponsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" | "latest-only" => Ok(ResponsePolicy::LatestOnly),
            "last-writer-wins" | "lww" => Ok(ResponsePolicy::LastWriterWins),
            other => Err(format!("unknown response policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionState {
    pub seq: u64,
    pub content: RegionContent,
}

impl RegionState {
    pub fn snapshot<'a>(&self, region: &'a str) -> RegionSnapshot<'a> {
        RegionSnapshot {
            region,
            seq: self.seq,
            state: self.content.as_str(),
            markup: self.content.markup(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegionSnapshot<'a> {
    pub region: &'a str,
    pub seq: u64,
    pub state: &'static str,
    pub markup: String,
}

/// Clones share the same slot.
#[derive(Debug, Clone)]
pub struct DisplayRegion {
    id: Arc<str>,
    state: Arc<watch::Sender<RegionState>>,
}

impl DisplayRegion {
    pub fn new(id: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(RegionState {
            seq: 0,
            content: RegionContent::Loading,
        });
        Self {
            id: Arc::from(id.into()),
            state: Arc::new(sender),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current(&self) -> RegionState {
        self.state.borrow().clone()
    }

    pub fn content(&self) -> RegionContent {
        self.state.borrow().content.clone()
    }

    pub fn markup(&self) -> String {
        self.state.borrow().content.markup()
    }

    pub fn subscribe(&self) -> watch::Receiver<RegionState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> RegionSnapshot<'_> {
        self.state.borrow().snapshot(&self.id)
    }

    pub fn begin(&self, seq: u64) {
        self.state.send_modify(|state| {
            state.seq = seq;
            state.content = RegionContent::Loading;
        });
    }

    /// Writes the outcome of cycle `seq`. Returns false when the policy
    /// dropped it as stale.
    pub fn apply(&self, seq: u64, content: RegionContent, policy: ResponsePolicy) -> bool {
        self.state.send_if_modified(|state| {
            if policy == ResponsePolicy::LatestOnly && state.seq != seq {
                return false;
            }
            state.content = content;
            true
        })
    }
}

impl Default for DisplayRegion {
    fn default() -> Self {
        Self::new(DEFAULT_REGION_ID)
    }
}
