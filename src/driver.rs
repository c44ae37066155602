//! Cooperative scheduling of spin frames.
//!
//! Every frame is scheduled one frame delay after the previous frame ran, so
//! any lateness of the event loop pushes the rest of the spin back.

use crate::{
    fruit::Outcome,
    machine::{
        Frame,
        IconSource,
        SlotMachine,
    },
    presenter::Presenter,
};
use std::{
    future,
    pin::Pin,
    time::Duration,
};
use tokio::time::{
    self,
    Sleep,
};
use tracing::debug;

/// One-shot timer re-armed after each frame. Safe to poll from
/// `tokio::select!`: an interrupted wait resumes where it left off.
#[derive(Debug)]
pub struct FrameTimer {
    delay: Duration,
    sleep: Option<Pin<Box<Sleep>>>,
}

impl FrameTimer {
    pub fn new(delay: Duration) -> Self {
        FrameTimer { delay, sleep: None }
    }

    pub fn arm(&mut self) {
        self.sleep = Some(Box::pin(time::sleep(self.delay)));
    }

    pub fn disarm(&mut self) {
        self.sleep = None;
    }

    pub fn is_armed(&self) -> bool {
        self.sleep.is_some()
    }

    /// Resolves when the armed delay elapses. Never resolves while disarmed.
    pub async fn wait(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.sleep = None;
            }
            None => future::pending::<()>().await,
        }
    }
}

/// Triggers a spin and runs its first frame right away. Returns `false` if a
/// session was already running.
pub fn start_spin<I: IconSource, P: Presenter>(
    machine: &mut SlotMachine<I, P>,
    timer: &mut FrameTimer,
) -> bool {
    if !machine.trigger_spin() {
        return false;
    }
    on_frame(machine, timer);
    true
}

/// Runs the due frame and schedules the next one if the session goes on.
pub fn on_frame<I: IconSource, P: Presenter>(
    machine: &mut SlotMachine<I, P>,
    timer: &mut FrameTimer,
) -> Frame {
    let frame = machine.advance_frame();
    match frame {
        Frame::Continue => timer.arm(),
        Frame::Finished(_) | Frame::Idle => timer.disarm(),
    }
    frame
}

/// Plays `sessions` complete spins back to back at the machine's frame delay.
pub async fn run_sessions<I: IconSource, P: Presenter>(
    machine: &mut SlotMachine<I, P>,
    sessions: u32,
) -> Vec<Outcome> {
    let mut timer = FrameTimer::new(machine.config().frame_delay());
    let mut outcomes = Vec::with_capacity(sessions as usize);
    for session in 0..sessions {
        if !start_spin(machine, &mut timer) {
            debug!(session, "machine busy, skipping session");
            continue;
        }
        loop {
            timer.wait().await;
            match on_frame(machine, &mut timer) {
                Frame::Continue => {}
                Frame::Finished(outcome) => {
                    outcomes.push(outcome);
                    break;
                }
                Frame::Idle => break,
            }
        }
    }
    outcomes
}
