//! Periodic timer threads.

use std::{
    io,
    panic::resume_unwind,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crossbeam::channel::{self, RecvTimeoutError, Sender};

/// A builder object that can be used to configure and spawn a [`Ticker`].
#[derive(Clone)]
pub struct TickerBuilder {
    name: Option<String>,
    interval: Duration,
    limit: Option<u64>,
}

impl TickerBuilder {
    /// Sets the name of the [`Ticker`] thread.
    pub fn name<N: Into<String>>(self, name: N) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Stops the [`Ticker`] after it has fired `limit` times.
    ///
    /// By default, a [`Ticker`] keeps firing until it is dropped or its handler returns `false`.
    pub fn limit(self, limit: u64) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    /// Spawns a [`Ticker`] thread that invokes `handler` once per interval.
    ///
    /// The first invocation happens one full interval after spawning. `handler` receives the
    /// number of the tick (starting at 1) and returns whether the ticker should keep running.
    pub fn spawn<F>(self, mut handler: F) -> io::Result<Ticker>
    where
        F: FnMut(u64) -> bool + Send + 'static,
    {
        let (stop, stopped) = channel::bounded::<()>(0);
        let mut builder = thread::Builder::new();
        if let Some(name) = self.name.clone() {
            builder = builder.name(name);
        }
        let interval = self.interval;
        let limit = self.limit.unwrap_or(u64::MAX);
        let name = self.name.unwrap_or_else(|| "<unnamed>".into());
        let handle = builder.spawn(move || {
            log::trace!("ticker '{name}' starting ({interval:?})");

            // Deadlines advance by exactly one interval so that slow handlers don't make the
            // ticker drift. Deadlines missed while the handler was busy are skipped rather than
            // fired back to back.
            let mut deadline = Instant::now();
            let mut count = 0;
            while count < limit {
                deadline += interval;
                let now = Instant::now();
                if deadline < now {
                    log::trace!("ticker '{name}' fell behind by {:?}", now - deadline);
                    deadline = now;
                }
                match stopped.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Err(RecvTimeoutError::Timeout) => {}
                    // Disconnected: the `Ticker` was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }

                count += 1;
                if !handler(count) {
                    break;
                }
            }

            log::trace!("ticker '{name}' exiting after {count} ticks");
        })?;

        Ok(Ticker {
            stop: Some(stop),
            handle: Some(handle),
        })
    }
}

/// A handle to a thread that runs a handler at a fixed interval.
///
/// When dropped, the thread is signalled to stop and joined. If the thread has panicked, the
/// panic will be forwarded to the thread dropping the `Ticker`.
pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Returns a builder for a [`Ticker`] firing every `interval`.
    #[inline]
    pub fn builder(interval: Duration) -> TickerBuilder {
        TickerBuilder {
            name: None,
            interval,
            limit: None,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // Disconnecting the channel wakes up the thread.
        drop(self.stop.take());

        if let Some(handle) = self.handle.take() {
            if let Err(payload) = handle.join() {
                if !thread::panicking() {
                    resume_unwind(payload);
                }
            }
        }
    }
}
