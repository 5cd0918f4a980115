// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Periodic re-rendering of the local time.

use std::time::Duration;

use anyhow::Result;
use futures::StreamExt;
use tick::{Clock, PeriodicTimer};
use tracing::Level;

/// How often the local time is refreshed when no interval is given.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Calls a render function now and then once per period.
#[derive(Debug)]
pub struct Refresh {
    clock: Clock,
    period: Duration,
    count: Option<u64>,
}

impl Refresh {
    /// Creates a refresh that reads time from `clock` and renders once per `period`.
    pub fn new(clock: &Clock, period: Duration) -> Self {
        Self {
            clock: clock.clone(),
            period,
            count: None,
        }
    }

    /// Stops after `count` renders. Without a count the refresh runs until the process exits.
    pub const fn count(mut self, count: Option<u64>) -> Self {
        self.count = count;
        self
    }

    /// Runs the refresh loop, stopping at the first render error.
    pub async fn run(self, mut render: impl FnMut() -> Result<()>) -> Result<()> {
        let mut remaining = self.count.unwrap_or(u64::MAX);
        if remaining == 0 {
            return Ok(());
        }

        render()?;
        remaining -= 1;

        let mut timer = PeriodicTimer::new(&self.clock, self.period);

        while remaining > 0 && timer.next().await.is_some() {
            tracing::event!(name: "tmz.refresh.tick", Level::DEBUG, refresh.remaining = remaining);
            render()?;
            remaining -= 1;
        }

        Ok(())
    }
}
