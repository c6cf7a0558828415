use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::domain::{Countdown, CountdownState};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Launch instant plus the tick period views refresh on.
pub struct CountdownService {
    target: DateTime<Utc>,
    period: Duration,
    clock: Arc<dyn Clock>,
}

impl CountdownService {
    /// `period` is floored at 1ms; a zero interval would panic the ticker.
    pub fn new(target: DateTime<Utc>, period: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            target,
            period: period.max(MIN_PERIOD),
            clock,
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn snapshot(&self) -> CountdownState {
        CountdownState::at(self.target, self.clock.now())
    }

    /// Start a ticker for one countdown view.
    ///
    /// `on_update` gets the state right away and then once per period until
    /// the countdown goes live (the live state is delivered too). `on_complete`
    /// runs once on the transition. The ticker stops when the returned handle
    /// is cancelled or dropped.
    pub fn spawn<U, C>(&self, mut on_update: U, on_complete: C) -> TickerHandle
    where
        U: FnMut(CountdownState) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let clock = self.clock.clone();
        let target = self.target;
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut countdown = Countdown::with_completion(target, clock.now(), on_complete);
            on_update(countdown.state());
            if countdown.state().is_live() {
                return;
            }

            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick resolves immediately; the initial state is already out.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => {
                        tracing::debug!("Countdown ticker cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        countdown.tick(clock.now());
                        on_update(countdown.state());
                        if countdown.state().is_live() {
                            break;
                        }
                    }
                }
            }
        });

        TickerHandle { token, task }
    }
}

/// Owner of a running ticker. Dropping it cancels the ticker.
pub struct TickerHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
