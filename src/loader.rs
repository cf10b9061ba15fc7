use crate::config::LoaderConfig;
use crate::models::{FragmentRequest, RegionContent};
use crate::region::{DisplayRegion, ResponsePolicy};
use crate::state::SessionState;
use crate::transport::FragmentTransport;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Entry points must be called inside a tokio runtime.
pub struct FragmentLoader<T> {
    transport: Arc<T>,
    region: DisplayRegion,
    session: SessionState,
    policy: ResponsePolicy,
    last_seq: u64,
    in_flight: Vec<JoinHandle<()>>,
}

impl<T: FragmentTransport> FragmentLoader<T> {
    pub fn open(
        transport: T,
        region: DisplayRegion,
        session: SessionState,
        policy: ResponsePolicy,
    ) -> Self {
        let mut loader = Self {
            transport: Arc::new(transport),
            region,
            session,
            policy,
            last_seq: 0,
            in_flight: Vec::new(),
        };
        loader.run_cycle();
        loader
    }

    pub fn from_config(transport: T, config: &LoaderConfig) -> Self {
        Self::open(
            transport,
            config.region(),
            config.session(),
            config.response_policy,
        )
    }

    pub fn select_tab(&mut self, tab: impl Into<String>) {
        self.session.current_tab = tab.into();
        self.run_cycle();
    }

    pub fn select_time_period(&mut self, period: impl Into<String>) {
        self.session.current_time_period = period.into();
        self.run_cycle();
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn region(&self) -> &DisplayRegion {
        &self.region
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Waits until every cycle dispatched so far has written its result.
    pub async fn settle(&mut self) {
        for handle in self.in_flight.drain(..) {
            if let Err(err) = handle.await {
                error!("fragment cycle task failed: {err}");
            }
        }
    }

    fn run_cycle(&mut self) {
        self.last_seq += 1;
        let request = FragmentRequest::new(
            self.last_seq,
            &self.session.current_tab,
            &self.session.current_time_period,
        );

        self.region.begin(request.seq);
        info!(
            region = self.region.id(),
            seq = request.seq,
            "loading {}",
            request.path_and_query()
        );

        self.in_flight.retain(|handle| !handle.is_finished());

        let transport = Arc::clone(&self.transport);
        let region = self.region.clone();
        let policy = self.policy;
        self.in_flight.push(tokio::spawn(async move {
            let content = match transport.fetch(&request).await {
                Ok(body) => RegionContent::Fragment(body),
                Err(err) => {
                    error!(seq = request.seq, tab = %request.tab, "error loading content: {err}");
                    RegionContent::Error
                }
            };

            if !region.apply(request.seq, content, policy) {
                debug!(seq = request.seq, "dropping response for superseded request");
            }
        }));
    }
}
