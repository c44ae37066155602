use crate::fruit::Fruit;

pub const COLUMNS: usize = 3;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub const ALL: [Column; COLUMNS] = [Column::Left, Column::Center, Column::Right];

    pub fn index(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Center => 1,
            Column::Right => 2,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Top,
    Middle,
    Bottom,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Top, Tier::Middle, Tier::Bottom];

    pub fn index(self) -> usize {
        match self {
            Tier::Top => 0,
            Tier::Middle => 1,
            Tier::Bottom => 2,
        }
    }
}

/// What one column shows after a scroll step.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ColumnView {
    pub top: Fruit,
    pub middle: Fruit,
    pub bottom: Fruit,
}

impl ColumnView {
    pub fn tiers(&self) -> [(Tier, Fruit); 3] {
        [
            (Tier::Top, self.top),
            (Tier::Middle, self.middle),
            (Tier::Bottom, self.bottom),
        ]
    }
}

/// Per-column icon staging. `current` is what the middle tier shows, `next`
/// is already visible in the top tier and scrolls into the middle on the
/// following step.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReelState {
    current: [Fruit; COLUMNS],
    next: [Fruit; COLUMNS],
}

impl ReelState {
    pub fn new(initial: Fruit) -> Self {
        ReelState {
            current: [initial; COLUMNS],
            next: [initial; COLUMNS],
        }
    }

    pub fn current(&self, column: Column) -> Fruit {
        self.current[column.index()]
    }

    pub fn next(&self, column: Column) -> Fruit {
        self.next[column.index()]
    }

    pub fn middle_row(&self) -> [Fruit; COLUMNS] {
        self.current
    }

    /// Scrolls `column` down by one icon, staging `incoming` at the top.
    pub fn scroll(&mut self, column: Column, incoming: Fruit) -> ColumnView {
        let idx = column.index();
        let bottom = self.current[idx];
        self.current[idx] = self.next[idx];
        self.next[idx] = incoming;
        ColumnView {
            top: self.next[idx],
            middle: self.current[idx],
            bottom,
        }
    }

    /// The view of a column as it currently stands, used for the initial paint.
    pub fn view(&self, column: Column) -> ColumnView {
        let idx = column.index();
        ColumnView {
            top: self.next[idx],
            middle: self.current[idx],
            bottom: self.current[idx],
        }
    }

    pub fn is_line(&self) -> bool {
        let [a, b, c] = self.current;
        a == b && b == c
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn scroll__shifts_next_into_middle_and_current_into_bottom() {
        // given
        let mut reels = ReelState::new(Fruit::Apple);
        reels.scroll(Column::Center, Fruit::Lemon);

        // when
        let view = reels.scroll(Column::Center, Fruit::Orange);

        // then
        assert_eq!(
            view,
            ColumnView {
                top: Fruit::Orange,
                middle: Fruit::Lemon,
                bottom: Fruit::Apple,
            }
        );
        assert_eq!(reels.current(Column::Center), Fruit::Lemon);
        assert_eq!(reels.next(Column::Center), Fruit::Orange);
    }

    #[test]
    fn scroll__leaves_other_columns_alone() {
        // given
        let mut reels = ReelState::new(Fruit::Apple);

        // when
        reels.scroll(Column::Left, Fruit::Bananas);
        reels.scroll(Column::Left, Fruit::Bananas);

        // then
        assert_eq!(
            reels.middle_row(),
            [Fruit::Bananas, Fruit::Apple, Fruit::Apple]
        );
    }

    #[test]
    fn is_line__only_when_all_middles_match() {
        let mut reels = ReelState::new(Fruit::Apple);
        assert!(reels.is_line());

        reels.scroll(Column::Right, Fruit::Lemon);
        reels.scroll(Column::Right, Fruit::Lemon);
        assert!(!reels.is_line());
    }
}
