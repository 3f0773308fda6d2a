//! Latest-value bookkeeping and the aggregation task.

use crate::aggregate::group::{group_by_day, into_schedule};
use crate::aggregate::index::{build_day_index, build_speaker_index};
use crate::aggregate::join::resolve_all;
use crate::config::{ConfigError, PipelineConfig};
use crate::model::raw::{RawDay, RawDaySet, RawSession, RawSessionSet, RawSpeaker, RawSpeakerSet};
use crate::model::schedule::Schedule;
use crate::pipeline::feed::{self, Feed, FeedError, FeedItem, FeedSender};
use log::{debug, info, warn};
use std::fmt::{Display, Formatter};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Builds one schedule from a triple of snapshots.
///
/// Pure: identical inputs always produce structurally equal schedules.
pub fn recompute(sessions: &[RawSession], speakers: &[RawSpeaker], days: &[RawDay]) -> Schedule {
    let speaker_index = build_speaker_index(speakers);
    let day_index = build_day_index(days);
    let events = resolve_all(sessions, &speaker_index, &day_index);
    into_schedule(group_by_day(events))
}

/// Identifies one of the three pipeline inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Sessions,
    Speakers,
    Days,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sessions => "sessions",
            Self::Speakers => "speakers",
            Self::Days => "days",
        };
        f.write_str(name)
    }
}

/// A new snapshot for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputUpdate {
    Sessions(RawSessionSet),
    Speakers(RawSpeakerSet),
    Days(RawDaySet),
}

impl InputUpdate {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Sessions(_) => InputKind::Sessions,
            Self::Speakers(_) => InputKind::Speakers,
            Self::Days(_) => InputKind::Days,
        }
    }
}

/// Latest snapshot per input.
///
/// Owned by a single aggregation task, so every update is applied and
/// recomputed as one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestInputs {
    sessions: Option<RawSessionSet>,
    speakers: Option<RawSpeakerSet>,
    days: Option<RawDaySet>,
}

impl LatestInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot for the update's input.
    pub fn apply(&mut self, update: InputUpdate) {
        match update {
            InputUpdate::Sessions(value) => self.sessions = Some(value),
            InputUpdate::Speakers(value) => self.speakers = Some(value),
            InputUpdate::Days(value) => self.days = Some(value),
        }
    }

    pub fn has(&self, kind: InputKind) -> bool {
        match kind {
            InputKind::Sessions => self.sessions.is_some(),
            InputKind::Speakers => self.speakers.is_some(),
            InputKind::Days => self.days.is_some(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.sessions.is_some() && self.speakers.is_some() && self.days.is_some()
    }

    /// Recomputes from the held triple; `None` until all three are present.
    pub fn snapshot(&self) -> Option<Schedule> {
        Some(recompute(
            self.sessions.as_deref()?,
            self.speakers.as_deref()?,
            self.days.as_deref()?,
        ))
    }
}

/// Factory for aggregate schedule feeds.
#[derive(Debug, Clone, Default)]
pub struct SchedulePipeline {
    config: PipelineConfig,
}

impl SchedulePipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Creates an input feed sized by the validated `input_capacity`.
    pub fn input_channel<T>(&self) -> (FeedSender<T>, Feed<T>) {
        feed::channel(self.config.input_capacity)
    }

    /// Starts combining the three feeds.
    ///
    /// Must be called from within a tokio runtime; the aggregation task is
    /// spawned onto it and recomputation runs on whichever worker polls it.
    pub fn subscribe(
        &self,
        sessions: Feed<RawSessionSet>,
        speakers: Feed<RawSpeakerSet>,
        days: Feed<RawDaySet>,
    ) -> ScheduleFeed {
        let (tx, rx) = mpsc::channel(self.config.output_capacity);
        info!(
            "event=pipeline_subscribe module=pipeline status=ok output_capacity={}",
            self.config.output_capacity
        );
        let task = tokio::spawn(combine_latest(sessions, speakers, days, tx));
        ScheduleFeed { rx, task }
    }
}

/// Aggregate feed handed to the display layer.
///
/// Dropping it cancels the aggregation task and releases the input feeds.
#[derive(Debug)]
pub struct ScheduleFeed {
    rx: mpsc::Receiver<FeedItem<Schedule>>,
    task: JoinHandle<()>,
}

impl ScheduleFeed {
    /// Next schedule, the forwarded upstream failure, or `None` when finished.
    pub async fn recv(&mut self) -> Option<FeedItem<Schedule>> {
        self.rx.recv().await
    }

    /// Stops the aggregation task and waits until inputs are released.
    pub async fn unsubscribe(mut self) {
        self.rx.close();
        self.task.abort();
        // Why: an aborted task always resolves to a cancellation error.
        let _ = (&mut self.task).await;
        debug!("event=pipeline_unsubscribe module=pipeline status=ok");
    }
}

impl Drop for ScheduleFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

enum Step {
    Update(InputUpdate),
    Failed(InputKind, FeedError),
    Completed(InputKind),
    Cancelled,
}

fn step<T>(kind: InputKind, item: Option<FeedItem<T>>, wrap: fn(T) -> InputUpdate) -> Step {
    match item {
        Some(Ok(value)) => Step::Update(wrap(value)),
        Some(Err(error)) => Step::Failed(kind, error),
        None => Step::Completed(kind),
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenInputs {
    sessions: bool,
    speakers: bool,
    days: bool,
}

impl OpenInputs {
    fn close(&mut self, kind: InputKind) {
        match kind {
            InputKind::Sessions => self.sessions = false,
            InputKind::Speakers => self.speakers = false,
            InputKind::Days => self.days = false,
        }
    }

    fn any(&self) -> bool {
        self.sessions || self.speakers || self.days
    }
}

async fn combine_latest(
    mut sessions: Feed<RawSessionSet>,
    mut speakers: Feed<RawSpeakerSet>,
    mut days: Feed<RawDaySet>,
    out: mpsc::Sender<FeedItem<Schedule>>,
) {
    let mut latest = LatestInputs::new();
    let mut open = OpenInputs {
        sessions: true,
        speakers: true,
        days: true,
    };

    loop {
        let next = tokio::select! {
            biased;
            _ = out.closed() => Step::Cancelled,
            item = sessions.recv(), if open.sessions => {
                step(InputKind::Sessions, item, InputUpdate::Sessions)
            }
            item = speakers.recv(), if open.speakers => {
                step(InputKind::Speakers, item, InputUpdate::Speakers)
            }
            item = days.recv(), if open.days => step(InputKind::Days, item, InputUpdate::Days),
        };

        match next {
            Step::Update(update) => {
                let kind = update.kind();
                latest.apply(update);
                let Some(schedule) = latest.snapshot() else {
                    debug!(
                        "event=pipeline_wait module=pipeline status=pending input={}",
                        kind
                    );
                    continue;
                };
                debug!(
                    "event=pipeline_recompute module=pipeline status=ok input={} pages={} events={}",
                    kind,
                    schedule.page_count(),
                    schedule.event_count()
                );
                if out.send(Ok(schedule)).await.is_err() {
                    debug!("event=pipeline_cancel module=pipeline status=ok reason=receiver_dropped");
                    break;
                }
            }
            Step::Failed(kind, error) => {
                warn!(
                    "event=pipeline_upstream_failure module=pipeline status=error input={} error={}",
                    kind, error
                );
                let _ = out.send(Err(error)).await;
                break;
            }
            Step::Completed(kind) => {
                open.close(kind);
                if !latest.has(kind) {
                    info!(
                        "event=pipeline_complete module=pipeline status=ok reason=input_empty input={}",
                        kind
                    );
                    break;
                }
                if !open.any() {
                    info!(
                        "event=pipeline_complete module=pipeline status=ok reason=inputs_complete"
                    );
                    break;
                }
            }
            Step::Cancelled => {
                debug!("event=pipeline_cancel module=pipeline status=ok reason=receiver_closed");
                break;
            }
        }
    }
}
