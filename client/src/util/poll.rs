//! Poll session: the one refresh lifecycle shared by every view.
//!
//! DESIGN
//! ======
//! A view acquires a [`PollSession`] on entry and registers it with
//! `on_cleanup`; dropping the session stops its loop. The loop is
//! self-rescheduling: the next wait starts only after the current tick
//! finishes, so a slow or failed refresh delays the following one but never
//! overlaps it or skips it. Ticks handle their own errors, so nothing a tick
//! does can end the loop.
//!
//! The scheduler is [`run_poll_loop`], generic over the sleep primitive so it
//! runs on `gloo-timers` in the browser and on a ready future in tests.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::time::Duration;

use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use futures::future::{Either, select};

/// Lifecycle command sent to a running loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollCommand {
    /// Suspend ticking until [`PollCommand::Resume`].
    Pause,
    /// Tick immediately, then continue on the interval.
    Resume,
    /// End the loop.
    Stop,
}

/// Receiving half consumed by [`run_poll_loop`].
pub type PollCommands = UnboundedReceiver<PollCommand>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PollState {
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wake {
    Elapsed,
    Command(PollCommand),
    Closed,
}

impl PollState {
    /// Next state after a wake-up, or `None` when the loop must end.
    fn on_wake(self, wake: Wake) -> Option<Self> {
        match wake {
            Wake::Elapsed => Some(self),
            Wake::Command(PollCommand::Pause) => Some(Self::Paused),
            Wake::Command(PollCommand::Resume) => Some(Self::Running),
            Wake::Command(PollCommand::Stop) | Wake::Closed => None,
        }
    }
}

/// Cloneable control handle for a poll loop.
#[derive(Clone, Debug)]
pub struct PollHandle {
    tx: UnboundedSender<PollCommand>,
}

impl PollHandle {
    pub fn pause(&self) {
        self.send(PollCommand::Pause);
    }

    pub fn resume(&self) {
        self.send(PollCommand::Resume);
    }

    pub fn stop(&self) {
        self.send(PollCommand::Stop);
    }

    fn send(&self, command: PollCommand) {
        // A closed channel means the loop already ended.
        if self.tx.unbounded_send(command).is_err() {
            leptos::logging::log!("poll loop already stopped; dropped {command:?}");
        }
    }
}

/// Create a linked handle/receiver pair.
pub fn poll_channel() -> (PollHandle, PollCommands) {
    let (tx, rx) = unbounded();
    (PollHandle { tx }, rx)
}

/// Drive `tick` every `interval` until stopped.
///
/// The first tick runs immediately. Commands already queued take precedence
/// over an elapsed interval. Returns the number of ticks run.
pub async fn run_poll_loop<T, TF, S, SF>(interval: Duration, mut commands: PollCommands, mut tick: T, mut sleep: S) -> u64
where
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
{
    let mut state = PollState::Running;
    let mut ticks = 0_u64;
    loop {
        if state == PollState::Running {
            tick().await;
            ticks += 1;
        }

        let wake = match state {
            PollState::Paused => commands.next().await.map_or(Wake::Closed, Wake::Command),
            PollState::Running => {
                let pause = std::pin::pin!(sleep(interval));
                match select(commands.next(), pause).await {
                    Either::Left((Some(command), _)) => Wake::Command(command),
                    Either::Left((None, _)) => Wake::Closed,
                    Either::Right(((), _)) => Wake::Elapsed,
                }
            }
        };

        match state.on_wake(wake) {
            Some(next) => state = next,
            None => break,
        }
    }
    ticks
}

/// Scoped poll loop. Dropping the session stops the loop.
#[derive(Debug)]
pub struct PollSession {
    handle: PollHandle,
}

impl PollSession {
    /// Start polling `tick` every `interval` on the browser event loop.
    ///
    /// Outside the browser build nothing is scheduled; the session is inert.
    pub fn start<F, Fut>(interval: Duration, tick: F) -> Self
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let (handle, commands) = poll_channel();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let ticks = run_poll_loop(interval, commands, tick, gloo_timers::future::sleep).await;
            leptos::logging::log!("poll session ended after {ticks} ticks");
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (interval, tick, commands);
        }
        Self { handle }
    }

    pub fn handle(&self) -> PollHandle {
        self.handle.clone()
    }
}

impl Drop for PollSession {
    fn drop(&mut self) {
        self.handle.stop();
    }
}
