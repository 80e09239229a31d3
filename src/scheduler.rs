use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::pipeline::{self, AppContext};

const POLL_INTERVAL: Duration = Duration::from_secs(60);
const DAILY_HOUR: u32 = 9;
const DAILY_MINUTE: u32 = 0;
// IST never observes DST, a fixed offset is sufficient.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Spawn the daily-search timer task. The loop polls once a minute and runs
/// the pipeline inline when the 09:00 IST mark is reached, so a long run
/// defers later polls instead of overlapping them. Pipeline errors are
/// logged; the loop never exits.
pub fn spawn(ctx: Arc<AppContext>) -> JoinHandle<()> {
    tokio::spawn(run(ctx))
}

async fn run(ctx: Arc<AppContext>) {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is in range");
    tracing::info!(
        "scheduler started, daily search at {:02}:{:02} IST",
        DAILY_HOUR,
        DAILY_MINUTE
    );

    // A restart after today's mark must not re-run (and re-mail) today's
    // search; only the next crossing of the mark fires.
    let mut last_run_date = startup_suppression(&Utc::now().with_timezone(&ist));
    loop {
        tokio::time::sleep(POLL_INTERVAL).await;

        let now = Utc::now().with_timezone(&ist);
        if is_due(&now, last_run_date) {
            // Marked before the run so a failure does not retrigger today.
            last_run_date = Some(now.date_naive());
            if let Err(e) = pipeline::run_daily_search(&ctx).await {
                tracing::error!("daily job search failed: {:#}", e);
            }
        }
    }
}

fn daily_mark() -> NaiveTime {
    NaiveTime::from_hms_opt(DAILY_HOUR, DAILY_MINUTE, 0).expect("valid daily mark")
}

/// Seed the last-run date for a process started mid-day: when the mark has
/// already passed, today counts as handled and the timer waits for
/// tomorrow's crossing.
fn startup_suppression(now: &DateTime<FixedOffset>) -> Option<NaiveDate> {
    (now.time() >= daily_mark()).then(|| now.date_naive())
}

/// True when the daily mark has passed and no run has happened on this
/// (IST) date yet. A pipeline run that blocks past the mark fires on the
/// next poll, late but never twice in one day.
fn is_due(now: &DateTime<FixedOffset>, last_run_date: Option<NaiveDate>) -> bool {
    now.time() >= daily_mark() && last_run_date != Some(now.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(IST_OFFSET_SECS).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        ist().with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn not_due_before_the_daily_mark() {
        assert!(!is_due(&at(2026, 8, 26, 8, 59), None));
    }

    #[test]
    fn due_at_and_after_the_mark() {
        assert!(is_due(&at(2026, 8, 26, 9, 0), None));
        assert!(is_due(&at(2026, 8, 26, 17, 30), None));
    }

    #[test]
    fn never_fires_twice_on_one_date() {
        let today = at(2026, 8, 26, 9, 1);
        assert!(is_due(&today, None));
        assert!(!is_due(&today, Some(today.date_naive())));
        // A long run that spills into later polls stays suppressed.
        assert!(!is_due(&at(2026, 8, 26, 13, 0), Some(today.date_naive())));
    }

    #[test]
    fn restart_after_the_mark_waits_for_tomorrow() {
        // Process comes up at 13:00 IST; today's run already happened (or
        // was missed) and must not fire again today.
        let now = at(2026, 8, 26, 13, 0);
        let seeded = startup_suppression(&now);
        assert_eq!(seeded, Some(now.date_naive()));
        assert!(!is_due(&now, seeded));
        assert!(!is_due(&at(2026, 8, 26, 23, 59), seeded));
        // Tomorrow's crossing fires normally.
        assert!(is_due(&at(2026, 8, 27, 9, 0), seeded));
    }

    #[test]
    fn restart_before_the_mark_fires_at_the_mark() {
        let seeded = startup_suppression(&at(2026, 8, 26, 7, 30));
        assert_eq!(seeded, None);
        assert!(!is_due(&at(2026, 8, 26, 8, 59), seeded));
        assert!(is_due(&at(2026, 8, 26, 9, 0), seeded));
    }

    #[test]
    fn fires_again_the_next_day() {
        let yesterday = at(2026, 8, 25, 9, 0).date_naive();
        assert!(is_due(&at(2026, 8, 26, 9, 0), Some(yesterday)));
    }
}
