use crate::{
    fruit::{
        Fruit,
        Outcome,
    },
    reel::{
        Column,
        Tier,
    },
    stats::Statistics,
};
use tracing::info;

/// Everything the machine needs from whatever is drawing it.
pub trait Presenter {
    fn set_icon(&mut self, column: Column, tier: Tier, fruit: Fruit);

    /// Whether a spin may be requested. Also drives the button colour.
    fn set_spin_enabled(&mut self, enabled: bool);

    fn show_result(&mut self, outcome: Outcome);

    fn hide_result(&mut self);

    /// `refresh_losses` is false while a spin is still running, so the
    /// pending spin is not shown as a loss yet.
    fn show_statistics(&mut self, stats: &Statistics, refresh_losses: bool);
}

/// Headless presenter that only reports results, for `--simulate`.
#[derive(Debug, Default)]
pub struct LogPresenter {
    last: Option<Outcome>,
}

impl LogPresenter {
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last
    }
}

impl Presenter for LogPresenter {
    fn set_icon(&mut self, _column: Column, _tier: Tier, _fruit: Fruit) {}

    fn set_spin_enabled(&mut self, _enabled: bool) {}

    fn show_result(&mut self, outcome: Outcome) {
        self.last = Some(outcome);
    }

    fn hide_result(&mut self) {
        self.last = None;
    }

    fn show_statistics(&mut self, stats: &Statistics, refresh_losses: bool) {
        if refresh_losses {
            info!(%stats, "statistics updated");
        }
    }
}
