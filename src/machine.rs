use crate::{
    config::{
        ConfigError,
        MachineConfig,
    },
    fruit::{
        Fruit,
        Outcome,
    },
    presenter::Presenter,
    reel::{
        COLUMNS,
        Column,
        ReelState,
    },
    stats::Statistics,
};
use itertools::Itertools;
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
};
use tracing::{
    debug,
    info,
};

/// Supplies the fruit drawn for a column on each frame.
pub trait IconSource {
    /// Returns one fruit out of the first `fruit_count` icons.
    fn draw(&mut self, fruit_count: u8) -> Fruit;
}

/// Uniform, independent draws.
#[derive(Debug)]
pub struct RandomIcons<R = StdRng> {
    rng: R,
}

impl RandomIcons<StdRng> {
    pub fn from_os_rng() -> Self {
        RandomIcons {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomIcons {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> IconSource for RandomIcons<R> {
    fn draw(&mut self, fruit_count: u8) -> Fruit {
        let bound = usize::from(fruit_count.max(1));
        Fruit::from_index(self.rng.random_range(0..bound))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpinSession {
    repetition: u32,
}

impl SpinSession {
    pub fn repetition(&self) -> u32 {
        self.repetition
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MachineState {
    #[default]
    Idle,
    Spinning(SpinSession),
}

/// Result of advancing one frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Frame {
    /// Another frame is due after the frame delay.
    Continue,
    /// The session ended with this frame.
    Finished(Outcome),
    /// No session was running; nothing happened.
    Idle,
}

pub struct SlotMachine<I, P> {
    config: MachineConfig,
    icons: I,
    presenter: P,
    reels: ReelState,
    state: MachineState,
    stats: Statistics,
}

impl<I: IconSource, P: Presenter> SlotMachine<I, P> {
    /// Validates `config` and paints the initial grid, statistics and an
    /// enabled spin button.
    pub fn new(config: MachineConfig, icons: I, presenter: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut machine = SlotMachine {
            config,
            icons,
            presenter,
            reels: ReelState::new(Fruit::default()),
            state: MachineState::Idle,
            stats: Statistics::default(),
        };
        machine.paint();
        Ok(machine)
    }

    fn paint(&mut self) {
        for column in Column::ALL {
            for (tier, fruit) in self.reels.view(column).tiers() {
                self.presenter.set_icon(column, tier, fruit);
            }
        }
        self.presenter.set_spin_enabled(true);
        self.presenter.hide_result();
        self.presenter.show_statistics(&self.stats, true);
    }

    /// Starts a session. Returns `false` and changes nothing while one is
    /// already running.
    pub fn trigger_spin(&mut self) -> bool {
        if let MachineState::Spinning(session) = self.state {
            debug!(repetition = session.repetition, "spin requested mid-session, ignored");
            return false;
        }
        self.state = MachineState::Spinning(SpinSession { repetition: 0 });
        self.presenter.set_spin_enabled(false);
        self.presenter.hide_result();
        self.stats.record_spin();
        self.presenter.show_statistics(&self.stats, false);
        info!(spin = self.stats.total_spins(), "spin started");
        true
    }

    /// Runs one animation step of the current session.
    pub fn advance_frame(&mut self) -> Frame {
        let MachineState::Spinning(session) = self.state else {
            return Frame::Idle;
        };
        let repetition = session.repetition;
        let fruit_count = self.config.fruit_count;
        let draws: [Fruit; COLUMNS] = std::array::from_fn(|_| self.icons.draw(fruit_count));

        for column in Column::ALL {
            if !self.column_moves(column, repetition) {
                continue;
            }
            let view = self.reels.scroll(column, draws[column.index()]);
            for (tier, fruit) in view.tiers() {
                self.presenter.set_icon(column, tier, fruit);
            }
            debug!(
                column = column.index(),
                repetition,
                "middle icon in column is now {}",
                view.middle
            );
        }

        if repetition < self.config.last_frame() {
            self.state = MachineState::Spinning(SpinSession {
                repetition: repetition + 1,
            });
            Frame::Continue
        } else {
            Frame::Finished(self.complete())
        }
    }

    fn column_moves(&self, column: Column, repetition: u32) -> bool {
        match column {
            Column::Left => repetition < self.config.first_column_stop(),
            Column::Center => repetition < self.config.second_column_stop(),
            Column::Right => true,
        }
    }

    fn complete(&mut self) -> Outcome {
        self.state = MachineState::Idle;
        self.presenter.set_spin_enabled(true);
        info!(
            "final combination is {}",
            self.reels.middle_row().iter().join(" & ")
        );
        let outcome = if self.reels.is_line() {
            self.stats.record_win();
            Outcome::Win
        } else {
            Outcome::Lose
        };
        self.presenter.show_statistics(&self.stats, true);
        self.presenter.show_result(outcome);
        info!(%outcome, stats = %self.stats, "spin finished");
        outcome
    }

    /// Drives a whole session without delays. Returns `None` if a session
    /// was already running and the trigger was ignored.
    pub fn spin_to_completion(&mut self) -> Option<Outcome> {
        if !self.trigger_spin() {
            return None;
        }
        loop {
            match self.advance_frame() {
                Frame::Continue => {}
                Frame::Finished(outcome) => return Some(outcome),
                Frame::Idle => return None,
            }
        }
    }
}

impl<I, P> SlotMachine<I, P> {
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, MachineState::Spinning(_))
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn reels(&self) -> &ReelState {
        &self.reels
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn icons_mut(&mut self) -> &mut I {
        &mut self.icons
    }
}
