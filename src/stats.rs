use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    total_spins: u64,
    total_wins: u64,
}

impl Statistics {
    pub fn total_spins(&self) -> u64 {
        self.total_spins
    }

    pub fn total_wins(&self) -> u64 {
        self.total_wins
    }

    pub fn losses(&self) -> u64 {
        self.total_spins.saturating_sub(self.total_wins)
    }

    /// Wins as a rounded percentage of spins, 0 before the first spin.
    pub fn win_ratio_percent(&self) -> u64 {
        if self.total_spins == 0 {
            return 0;
        }
        // round half up without going through floats
        (self.total_wins * 200 + self.total_spins) / (self.total_spins * 2)
    }

    pub(crate) fn record_spin(&mut self) {
        self.total_spins = self.total_spins.saturating_add(1);
    }

    pub(crate) fn record_win(&mut self) {
        self.total_wins = self.total_wins.saturating_add(1);
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spins {} | wins {} | losses {} | win ratio {}%",
            self.total_spins,
            self.total_wins,
            self.losses(),
            self.win_ratio_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    fn stats(spins: u64, wins: u64) -> Statistics {
        Statistics {
            total_spins: spins,
            total_wins: wins,
        }
    }

    #[test]
    fn win_ratio_percent__is_zero_before_any_spin() {
        assert_eq!(Statistics::default().win_ratio_percent(), 0);
    }

    #[test]
    fn win_ratio_percent__rounds_to_nearest() {
        assert_eq!(stats(10, 3).win_ratio_percent(), 30);
        assert_eq!(stats(3, 1).win_ratio_percent(), 33);
        assert_eq!(stats(3, 2).win_ratio_percent(), 67);
        assert_eq!(stats(8, 1).win_ratio_percent(), 13);
        assert_eq!(stats(4, 4).win_ratio_percent(), 100);
    }

    #[test]
    fn losses__are_spins_without_a_win() {
        assert_eq!(stats(10, 3).losses(), 7);
    }

    #[test]
    fn display__lists_every_counter() {
        assert_eq!(
            stats(10, 3).to_string(),
            "spins 10 | wins 3 | losses 7 | win ratio 30%"
        );
    }
}
