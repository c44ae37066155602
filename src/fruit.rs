use std::fmt;

/// Upper bound on the configurable number of fruits in play.
pub const MAX_FRUITS: u8 = 6;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Fruit {
    #[default]
    Apple,
    Lemon,
    Orange,
    Strawberry,
    Watermelon,
    Bananas,
}

impl Fruit {
    pub const ALL: [Fruit; MAX_FRUITS as usize] = [
        Fruit::Apple,
        Fruit::Lemon,
        Fruit::Orange,
        Fruit::Strawberry,
        Fruit::Watermelon,
        Fruit::Bananas,
    ];

    /// Maps a draw in `[0, MAX_FRUITS)` onto a fruit. Out of range indices
    /// wrap so a bad draw can never produce an invalid icon.
    pub fn from_index(index: usize) -> Fruit {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            Fruit::Apple => 0,
            Fruit::Lemon => 1,
            Fruit::Orange => 2,
            Fruit::Strawberry => 3,
            Fruit::Watermelon => 4,
            Fruit::Bananas => 5,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Fruit::Apple => "🍎",
            Fruit::Lemon => "🍋",
            Fruit::Orange => "🍊",
            Fruit::Strawberry => "🍓",
            Fruit::Watermelon => "🍉",
            Fruit::Bananas => "🍌",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Fruit::Apple => "Apple",
            Fruit::Lemon => "Lemon",
            Fruit::Orange => "Orange",
            Fruit::Strawberry => "Strawberry",
            Fruit::Watermelon => "Watermelon",
            Fruit::Bananas => "Bananas",
        }
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Lose,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn from_index__round_trips_every_fruit() {
        for fruit in Fruit::ALL {
            assert_eq!(Fruit::from_index(fruit.index()), fruit);
        }
    }

    #[test]
    fn from_index__wraps_out_of_range_draws() {
        // when
        let fruit = Fruit::from_index(MAX_FRUITS as usize + 1);

        // then
        assert_eq!(fruit, Fruit::Lemon);
    }
}
