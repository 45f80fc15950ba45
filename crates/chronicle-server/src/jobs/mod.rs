//! Background article work: the one-time seeding routine and the daily
//! generation schedule.

pub mod article_job;
pub mod schedule;

pub use article_job::{ArticleJob, InitOutcome};
pub use schedule::{DailyTime, spawn_daily};
