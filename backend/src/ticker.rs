use std::time::Duration;

use actix::Recipient;
use log::debug;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{self, MissedTickBehavior};

use crate::push::{Tick, dispatch};

/// Periodic task driving a single view.
///
/// The task lives exactly as long as this handle or the view owner, whichever
/// goes first.
#[derive(Debug)]
pub struct Ticker {
    task: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(period: Duration, owner: Recipient<Tick>) -> Self {
        let task = actix::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(err) = dispatch(&owner, period).await {
                    debug!("ticker stopped: {err}");
                    break;
                }
            }
        });
        Self { task }
    }

    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn status(&self) -> TickerStatus {
        TickerStatus(self.task.abort_handle())
    }
}

/// Observes a ticker's task without owning it.
#[derive(Debug, Clone)]
pub struct TickerStatus(AbortHandle);

impl TickerStatus {
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
