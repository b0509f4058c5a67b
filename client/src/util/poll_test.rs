use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future::{Ready, ready};

use super::*;

const INTERVAL: Duration = Duration::from_secs(5);

fn instant_sleep(_: Duration) -> Ready<()> {
    ready(())
}

#[test]
fn on_wake_transitions() {
    assert_eq!(PollState::Running.on_wake(Wake::Elapsed), Some(PollState::Running));
    assert_eq!(PollState::Running.on_wake(Wake::Command(PollCommand::Pause)), Some(PollState::Paused));
    assert_eq!(PollState::Paused.on_wake(Wake::Command(PollCommand::Resume)), Some(PollState::Running));
    assert_eq!(PollState::Paused.on_wake(Wake::Command(PollCommand::Pause)), Some(PollState::Paused));
    assert_eq!(PollState::Running.on_wake(Wake::Command(PollCommand::Stop)), None);
    assert_eq!(PollState::Paused.on_wake(Wake::Closed), None);
}

#[test]
fn ticks_until_stopped_from_inside_a_tick() {
    let (handle, commands) = poll_channel();
    let count = Rc::new(Cell::new(0_u32));
    let tick_count = Rc::clone(&count);
    let tick = move || {
        tick_count.set(tick_count.get() + 1);
        if tick_count.get() == 3 {
            handle.stop();
        }
        ready(())
    };

    let ticks = block_on(run_poll_loop(INTERVAL, commands, tick, instant_sleep));
    assert_eq!(ticks, 3);
    assert_eq!(count.get(), 3);
}

#[test]
fn pause_suppresses_ticks_until_resume() {
    let (handle, commands) = poll_channel();
    handle.pause();
    handle.resume();
    handle.stop();

    let ticks = block_on(run_poll_loop(INTERVAL, commands, || ready(()), instant_sleep));
    // Initial tick, then one immediate tick on resume.
    assert_eq!(ticks, 2);
}

#[test]
fn repeated_pause_does_not_tick() {
    let (handle, commands) = poll_channel();
    handle.pause();
    handle.pause();
    handle.stop();

    let ticks = block_on(run_poll_loop(INTERVAL, commands, || ready(()), instant_sleep));
    assert_eq!(ticks, 1);
}

#[test]
fn dropping_every_handle_ends_the_loop() {
    let (handle, commands) = poll_channel();
    drop(handle);

    let ticks = block_on(run_poll_loop(INTERVAL, commands, || ready(()), instant_sleep));
    assert_eq!(ticks, 1);
}

#[test]
fn interval_is_passed_to_sleep() {
    let (handle, commands) = poll_channel();
    let seen = Rc::new(Cell::new(Duration::ZERO));
    let seen_sleep = Rc::clone(&seen);
    let sleep = move |d: Duration| {
        seen_sleep.set(d);
        handle.stop();
        ready(())
    };

    block_on(run_poll_loop(INTERVAL, commands, || ready(()), sleep));
    assert_eq!(seen.get(), INTERVAL);
}

#[test]
fn session_drop_sends_stop() {
    let (handle, mut commands) = poll_channel();
    let session = PollSession { handle: handle.clone() };
    drop(session);

    assert_eq!(commands.try_recv().ok(), Some(PollCommand::Stop));
}

#[test]
fn session_handle_controls_the_same_loop() {
    let (handle, mut commands) = poll_channel();
    let session = PollSession { handle };
    session.handle().pause();

    assert_eq!(commands.try_recv().ok(), Some(PollCommand::Pause));
}

#[test]
fn inert_session_outside_browser_can_be_dropped() {
    let session = PollSession::start(INTERVAL, || ready(()));
    drop(session);
}
