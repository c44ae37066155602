use crate::{
    fruit::{
        Fruit,
        Outcome,
    },
    machine::IconSource,
    presenter::Presenter,
    reel::{
        Column,
        Tier,
    },
    stats::Statistics,
};
use std::collections::HashMap;

/// Cycles through a fixed pattern of fruits, ignoring the fruit count.
///
/// A frame always draws three fruits in column order, so a pattern of three
/// pins every column to its own fruit.
#[derive(Clone, Debug)]
pub struct ScriptedIcons {
    pattern: Vec<Fruit>,
    pos: usize,
    draws: usize,
}

impl ScriptedIcons {
    pub fn new(pattern: Vec<Fruit>) -> Self {
        assert!(!pattern.is_empty(), "scripted pattern must not be empty");
        ScriptedIcons {
            pattern,
            pos: 0,
            draws: 0,
        }
    }

    pub fn constant(fruit: Fruit) -> Self {
        Self::new(vec![fruit])
    }

    pub fn per_column(fruits: [Fruit; 3]) -> Self {
        Self::new(fruits.to_vec())
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl IconSource for ScriptedIcons {
    fn draw(&mut self, _fruit_count: u8) -> Fruit {
        let fruit = self.pattern[self.pos];
        self.pos = (self.pos + 1) % self.pattern.len();
        self.draws += 1;
        fruit
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PresenterCall {
    Icon {
        column: Column,
        tier: Tier,
        fruit: Fruit,
    },
    SpinEnabled(bool),
    Result(Outcome),
    HideResult,
    Statistics {
        stats: Statistics,
        refresh_losses: bool,
    },
}

/// Presenter that remembers every call plus the latest visible state.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
    icons: HashMap<(Column, Tier), Fruit>,
    spin_enabled: Option<bool>,
    result: Option<Outcome>,
}

impl RecordingPresenter {
    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    /// Forgets the call log, keeping the visible state.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn icon(&self, column: Column, tier: Tier) -> Option<Fruit> {
        self.icons.get(&(column, tier)).copied()
    }

    pub fn spin_enabled(&self) -> Option<bool> {
        self.spin_enabled
    }

    pub fn last_result(&self) -> Option<Outcome> {
        self.result
    }

    /// How many scroll steps `column` received since the last `clear`.
    pub fn column_updates(&self, column: Column) -> usize {
        self.calls
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    PresenterCall::Icon { column: c, tier: Tier::Middle, .. } if *c == column
                )
            })
            .count()
    }

    pub fn results(&self) -> Vec<Outcome> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PresenterCall::Result(outcome) => Some(*outcome),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn set_icon(&mut self, column: Column, tier: Tier, fruit: Fruit) {
        self.icons.insert((column, tier), fruit);
        self.calls.push(PresenterCall::Icon {
            column,
            tier,
            fruit,
        });
    }

    fn set_spin_enabled(&mut self, enabled: bool) {
        self.spin_enabled = Some(enabled);
        self.calls.push(PresenterCall::SpinEnabled(enabled));
    }

    fn show_result(&mut self, outcome: Outcome) {
        self.result = Some(outcome);
        self.calls.push(PresenterCall::Result(outcome));
    }

    fn hide_result(&mut self) {
        self.result = None;
        self.calls.push(PresenterCall::HideResult);
    }

    fn show_statistics(&mut self, stats: &Statistics, refresh_losses: bool) {
        self.calls.push(PresenterCall::Statistics {
            stats: *stats,
            refresh_losses,
        });
    }
}
