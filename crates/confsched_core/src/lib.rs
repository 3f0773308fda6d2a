//! Conference schedule aggregation core.
//! Joins session, speaker and day snapshots into a display-ready schedule.

pub mod aggregate;
pub mod config;
pub mod logging;
pub mod model;
pub mod pipeline;

pub use aggregate::group::{group_by_day, into_schedule, DayGroup};
pub use aggregate::index::{build_day_index, build_speaker_index, DayIndex, SpeakerIndex};
pub use aggregate::join::{resolve, resolve_all, resolve_date, resolve_speaker_names};
pub use config::{ConfigError, PipelineConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::ids::{is_valid_id, parse_day_ordinal, parse_event_id, INVALID_ID};
pub use model::raw::{RawDay, RawDaySet, RawSession, RawSessionSet, RawSpeaker, RawSpeakerSet};
pub use model::schedule::{ExperienceLevel, ResolvedEvent, Schedule, SchedulePage};
pub use pipeline::combine::{
    recompute, InputKind, InputUpdate, LatestInputs, ScheduleFeed, SchedulePipeline,
};
pub use pipeline::feed::{channel, Feed, FeedClosed, FeedError, FeedItem, FeedSender};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
