//! Bevy side of the telemetry feed.
//!
//! Fetches run on a dedicated worker thread with its own tokio runtime. Each
//! request carries a generation number. A newer request cancels a fetch still
//! in flight, a response is published only if no newer request has been
//! issued since, and publishing replaces the whole list in one assignment.

use std::future::Future;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::{FeedClient, FeedError, TrackedObject};
use crate::config::FeedConfig;

/// Plugin owning the feed worker and the published [`LiveFeed`].
pub struct FeedPlugin;

impl Plugin for FeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FeedConfig>()
            .init_resource::<FeedSchedule>()
            .init_resource::<LiveFeed>()
            .init_resource::<RefreshFeed>()
            .add_systems(Startup, start_feed_worker)
            .add_systems(
                Update,
                (tick_refresh_timer, send_feed_requests, receive_feed_responses).chain(),
            );
    }
}

/// Polling period. `None` fetches once at startup.
#[derive(Resource, Clone, Debug, Default)]
pub struct FeedSchedule {
    pub every: Option<Duration>,
}

/// Set `requested` to trigger a fetch on the next frame.
#[derive(Resource, Clone, Debug, Default)]
pub struct RefreshFeed {
    pub requested: bool,
}

/// The most recently published feed.
#[derive(Resource, Debug, Default)]
pub struct LiveFeed {
    /// Ranked objects, highest risk first.
    pub objects: Vec<TrackedObject>,
    /// Bumped on every successful publish.
    pub revision: u64,
    /// A request is outstanding.
    pub loading: bool,
    pub last_error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Result of one worker fetch.
#[derive(Debug)]
pub struct FeedOutcome {
    pub generation: u64,
    pub result: Result<Vec<TrackedObject>, FeedError>,
}

impl LiveFeed {
    /// Apply a worker result, given the newest generation requested so far.
    ///
    /// Returns `false` when the outcome was superseded and dropped. A failed
    /// fetch keeps the previous objects as the fallback list.
    pub fn apply(&mut self, outcome: FeedOutcome, latest_requested: u64) -> bool {
        if outcome.generation < latest_requested {
            debug!(
                "Dropping superseded feed response (generation {} < {})",
                outcome.generation, latest_requested
            );
            return false;
        }

        self.loading = false;
        match outcome.result {
            Ok(objects) => {
                info!(
                    "Feed generation {}: {} objects, top risk {}",
                    outcome.generation,
                    objects.len(),
                    objects.first().map_or(0, |o| o.risk.value())
                );
                self.objects = objects;
                self.revision += 1;
                self.last_error = None;
                self.fetched_at = Some(Utc::now());
            }
            Err(e) => {
                warn!(
                    "Feed generation {} failed, keeping {} objects: {}",
                    outcome.generation,
                    self.objects.len(),
                    e
                );
                self.last_error = Some(e.to_string());
            }
        }
        true
    }
}

/// Handle to the worker thread.
#[derive(Resource)]
pub struct FeedWorker {
    requests: UnboundedSender<u64>,
    responses: Mutex<Receiver<FeedOutcome>>,
    latest_requested: u64,
}

impl FeedWorker {
    /// Spawn the worker thread for `config`.
    pub fn spawn(config: FeedConfig) -> Result<Self, FeedError> {
        let client = FeedClient::new(config)?;
        let (req_tx, req_rx) = unbounded_channel::<u64>();
        let (res_tx, res_rx) = mpsc::channel::<FeedOutcome>();

        std::thread::Builder::new()
            .name("feed-worker".into())
            .spawn(move || run_worker(client, req_rx, res_tx))
            .map_err(FeedError::Spawn)?;

        Ok(Self {
            requests: req_tx,
            responses: Mutex::new(res_rx),
            latest_requested: 0,
        })
    }

    /// Queue a fetch. Returns the new generation, or `None` if the worker is gone.
    pub fn request(&mut self) -> Option<u64> {
        let generation = self.latest_requested + 1;
        self.requests.send(generation).ok()?;
        self.latest_requested = generation;
        Some(generation)
    }

    pub fn latest_requested(&self) -> u64 {
        self.latest_requested
    }

    /// Drain every finished outcome.
    fn drain(&self) -> Vec<FeedOutcome> {
        let Ok(rx) = self.responses.lock() else {
            return Vec::new();
        };
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }
}

fn run_worker(
    client: FeedClient,
    requests: UnboundedReceiver<u64>,
    responses: Sender<FeedOutcome>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Feed worker could not start its runtime: {}", e);
            return;
        }
    };

    let client = &client;
    runtime.block_on(serve_requests(
        move || client.fetch_current_objects(),
        requests,
        responses,
    ));
}

/// Answer generations until the request channel closes.
///
/// Queued requests are coalesced into the newest one, and a request arriving
/// mid-fetch abandons that fetch. Only completed fetches produce an outcome.
async fn serve_requests<F, Fut>(
    mut fetch: F,
    mut requests: UnboundedReceiver<u64>,
    responses: Sender<FeedOutcome>,
) where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<TrackedObject>, FeedError>>,
{
    let mut next = requests.recv().await;
    while let Some(mut generation) = next {
        // Only the newest queued request is worth serving.
        while let Ok(newer) = requests.try_recv() {
            generation = newer;
        }

        tokio::select! {
            result = fetch() => {
                if responses.send(FeedOutcome { generation, result }).is_err() {
                    return;
                }
                next = requests.recv().await;
            }
            Some(newer) = requests.recv() => {
                debug!("Feed generation {} abandoned for {}", generation, newer);
                next = Some(newer);
            }
        }
    }
}

fn start_feed_worker(
    mut commands: Commands,
    config: Res<FeedConfig>,
    mut refresh: ResMut<RefreshFeed>,
    schedule: Res<FeedSchedule>,
) {
    match FeedWorker::spawn(config.clone()) {
        Ok(worker) => {
            commands.insert_resource(worker);
            refresh.requested = true;
        }
        Err(e) => {
            error!("Failed to spawn feed worker: {}", e);
            return;
        }
    }

    if let Some(every) = schedule.every {
        commands.insert_resource(RefreshTimer(Timer::new(every, TimerMode::Repeating)));
        info!("Feed refresh every {} min", every.as_secs() / 60);
    }
}

#[derive(Resource)]
struct RefreshTimer(Timer);

fn tick_refresh_timer(
    time: Res<Time>,
    timer: Option<ResMut<RefreshTimer>>,
    mut refresh: ResMut<RefreshFeed>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    if timer.0.tick(time.delta()).just_finished() {
        refresh.requested = true;
    }
}

fn send_feed_requests(
    worker: Option<ResMut<FeedWorker>>,
    mut refresh: ResMut<RefreshFeed>,
    mut feed: ResMut<LiveFeed>,
) {
    if !refresh.requested {
        return;
    }
    refresh.requested = false;

    let Some(mut worker) = worker else {
        return;
    };
    match worker.request() {
        Some(generation) => {
            debug!("Feed request generation {}", generation);
            feed.loading = true;
        }
        None => warn!("Feed worker has stopped; request dropped"),
    }
}

fn receive_feed_responses(worker: Option<Res<FeedWorker>>, mut feed: ResMut<LiveFeed>) {
    let Some(worker) = worker else {
        return;
    };
    for outcome in worker.drain() {
        feed.apply(outcome, worker.latest_requested());
    }
}
