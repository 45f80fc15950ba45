use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use jiff::Zoned;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::jobs::article_job::ArticleJob;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("expected HH:MM, got {0:?}")]
    Malformed(String),

    #[error("time of day out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: i8, minute: i8 },
}

/// Wall-clock time of day, interpreted in the host's time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTime {
    hour: i8,
    minute: i8,
}

impl DailyTime {
    pub const MIDNIGHT: DailyTime = DailyTime { hour: 0, minute: 0 };

    pub fn new(hour: i8, minute: i8) -> Result<Self, ScheduleError> {
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
            return Err(ScheduleError::OutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> i8 {
        self.hour
    }

    pub fn minute(self) -> i8 {
        self.minute
    }
}

impl FromStr for DailyTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScheduleError::Malformed(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(malformed());
        }
        let hour = hour.parse().map_err(|_| malformed())?;
        let minute = minute.parse().map_err(|_| malformed())?;
        DailyTime::new(hour, minute)
    }
}

impl fmt::Display for DailyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// First instant strictly after `now` whose local time is `at`, in the
/// time zone of `now`.
pub fn next_fire_after(now: &Zoned, at: DailyTime) -> Result<Zoned, jiff::Error> {
    let tz = now.time_zone().clone();
    let today = now.date().at(at.hour, at.minute, 0, 0).to_zoned(tz.clone())?;
    if today > *now {
        return Ok(today);
    }

    now.date()
        .tomorrow()?
        .at(at.hour, at.minute, 0, 0)
        .to_zoned(tz)
}

/// Like [`next_fire_after`], but never at or before `last_fired`, so a
/// wall clock that steps backwards cannot repeat a run.
pub fn next_fire(
    now: &Zoned,
    last_fired: Option<&Zoned>,
    at: DailyTime,
) -> Result<Zoned, jiff::Error> {
    match last_fired {
        Some(last) if last >= now => {
            let after_last = last.with_time_zone(now.time_zone().clone());
            next_fire_after(&after_last, at)
        }
        _ => next_fire_after(now, at),
    }
}

/// Arm the daily generation loop. Each firing runs
/// [`ArticleJob::generate_daily`] on a blocking thread; a failed firing
/// never stops the loop.
pub fn spawn_daily(job: Arc<ArticleJob>, at: DailyTime) -> JoinHandle<()> {
    info!(at = %at, "article scheduler started");

    tokio::spawn(async move {
        let mut last_fired: Option<Zoned> = None;
        loop {
            let now = Zoned::now();
            let next = match next_fire(&now, last_fired.as_ref(), at) {
                Ok(next) => next,
                Err(e) => {
                    error!(error = %e, "cannot compute next run, scheduler stopped");
                    return;
                }
            };

            let wait = Duration::try_from(now.duration_until(&next)).unwrap_or(Duration::ZERO);
            info!(next_run = %next, wait_secs = wait.as_secs(), "next daily article scheduled");
            tokio::time::sleep(wait).await;
            last_fired = Some(next);

            info!("running daily article job");
            let job = Arc::clone(&job);
            if let Err(e) = tokio::task::spawn_blocking(move || job.generate_daily()).await {
                error!(error = %e, "daily article task panicked");
            }
        }
    })
}
