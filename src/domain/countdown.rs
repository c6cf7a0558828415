use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Remaining time split into display units. Always decomposes a whole
/// number of seconds: `days*86400 + hours*3600 + minutes*60 + seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Breakdown {
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// `None` once `now` has reached `target`. Sub-second remainders are
    /// truncated, so the last half second still counts as `00:00:00:00`.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        let diff = target - now;
        if diff <= Duration::zero() {
            return None;
        }
        Some(Self::from_seconds(diff.num_seconds()))
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    pub fn blocks(&self) -> [TimeBlock; 4] {
        [
            TimeBlock::new("Days", self.days),
            TimeBlock::new("Hours", self.hours),
            TimeBlock::new("Minutes", self.minutes),
            TimeBlock::new("Seconds", self.seconds),
        ]
    }
}

/// One labelled unit of the countdown display, zero-padded to two digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    pub label: &'static str,
    pub value: String,
}

impl TimeBlock {
    fn new(label: &'static str, value: i64) -> Self {
        Self {
            label,
            value: format!("{:02}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Counting(Breakdown),
    Live,
}

impl CountdownState {
    pub fn at(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        match Breakdown::between(target, now) {
            Some(breakdown) => CountdownState::Counting(breakdown),
            None => CountdownState::Live,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, CountdownState::Live)
    }

    pub fn remaining(&self) -> Option<Breakdown> {
        match self {
            CountdownState::Counting(breakdown) => Some(*breakdown),
            CountdownState::Live => None,
        }
    }
}

type Completion = Box<dyn FnOnce() + Send>;

/// Counting → Live state machine for one countdown view.
///
/// The completion callback runs exactly once, on the first observation of
/// `now >= target` (immediately on construction for a past target). Once
/// live, later ticks never go back to counting even if the clock does.
pub struct Countdown {
    target: DateTime<Utc>,
    state: CountdownState,
    on_complete: Option<Completion>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            target,
            state: CountdownState::at(target, now),
            on_complete: None,
        }
    }

    pub fn with_completion<F>(target: DateTime<Utc>, now: DateTime<Utc>, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let mut countdown = Self {
            target,
            state: CountdownState::at(target, now),
            on_complete: Some(Box::new(on_complete)),
        };
        if countdown.state.is_live() {
            countdown.complete();
        }
        countdown
    }

    /// Recompute against `now`. Returns `true` only on the tick that made
    /// the countdown go live.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.state.is_live() {
            return false;
        }
        self.state = CountdownState::at(self.target, now);
        if self.state.is_live() {
            self.complete();
            return true;
        }
        false
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    fn complete(&mut self) {
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

impl fmt::Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdown")
            .field("target", &self.target)
            .field("state", &self.state)
            .field("pending_completion", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_750_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_breakdown_decomposes_seconds() {
        for total in [0, 1, 59, 60, 3_599, 3_600, 86_399, 86_400, 90_061, 1_000_000] {
            let b = Breakdown::from_seconds(total);
            assert_eq!(b.total_seconds(), total);
            assert!(b.hours < 24 && b.minutes < 60 && b.seconds < 60);
        }

        let b = Breakdown::from_seconds(90_061);
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (1, 1, 1, 1));
    }

    #[test]
    fn test_between_truncates_milliseconds() {
        let now = at(0);
        let target = now + Duration::milliseconds(61_999);
        let b = Breakdown::between(target, now).unwrap();
        assert_eq!((b.minutes, b.seconds), (1, 1));

        let almost = now + Duration::milliseconds(500);
        assert_eq!(Breakdown::between(almost, now), Some(Breakdown::from_seconds(0)));
    }

    #[test]
    fn test_between_is_none_at_and_after_target() {
        assert_eq!(Breakdown::between(at(0), at(0)), None);
        assert_eq!(Breakdown::between(at(0), at(5)), None);
    }

    #[test]
    fn test_blocks_are_zero_padded() {
        let blocks = Breakdown::from_seconds(3 * 86_400 + 5).blocks();
        let rendered: Vec<_> = blocks.iter().map(|b| (b.label, b.value.as_str())).collect();
        assert_eq!(
            rendered,
            vec![("Days", "03"), ("Hours", "00"), ("Minutes", "00"), ("Seconds", "05")]
        );

        assert_eq!(Breakdown::from_seconds(120 * 86_400).blocks()[0].value, "120");
    }

    #[test]
    fn test_past_target_is_live_and_completes_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let mut countdown = Countdown::with_completion(at(0), at(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(countdown.state(), CountdownState::Live);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        assert!(!countdown.tick(at(11)));
        assert!(!countdown.tick(at(12)));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_transition_fires_on_first_live_tick() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let mut countdown = Countdown::with_completion(at(3), at(0), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(countdown.state().remaining().unwrap().seconds, 3);
        assert!(!countdown.tick(at(1)));
        assert!(!countdown.tick(at(2)));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        assert!(countdown.tick(at(3)));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!countdown.tick(at(4)));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_live_never_returns_to_counting() {
        let mut countdown = Countdown::new(at(0), at(1));
        assert!(countdown.state().is_live());

        countdown.tick(at(-100));
        assert!(countdown.state().is_live());
    }
}
