// cell.rs - Cell state and transition rules

/// A cell's age saturates here; the renderer maps 0..=510 onto a
/// green -> yellow -> red ramp.
pub const MAX_AGE: u16 = 510;

/// One grid cell: alive/dead plus the number of consecutive generations
/// it has stayed alive. A dead cell always has age 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub age: u16,
}

impl Cell {
    pub fn dead() -> Cell {
        Cell { alive: false, age: 0 }
    }

    /// Next state of a cell with exactly three live neighbours: a dead cell
    /// is born at age 0, a live cell survives and ages (capped at MAX_AGE).
    pub fn born_or_aged(prev: Cell) -> Cell {
        if prev.alive {
            Cell {
                alive: true,
                age: (prev.age + 1).min(MAX_AGE),
            }
        } else {
            Cell { alive: true, age: 0 }
        }
    }

    /// Next state of a cell with exactly two live neighbours: it keeps its
    /// alive/dead state, aging if it was already alive.
    pub fn carried(prev: Cell) -> Cell {
        if prev.alive {
            Cell::born_or_aged(prev)
        } else {
            Cell::dead()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_cell_has_age_zero() {
        let cell = Cell::dead();
        assert!(!cell.alive);
        assert_eq!(cell.age, 0);
    }

    #[test]
    fn birth_starts_at_age_zero() {
        let born = Cell::born_or_aged(Cell::dead());
        assert_eq!(born, Cell { alive: true, age: 0 });
    }

    #[test]
    fn survival_increments_age() {
        let survivor = Cell::born_or_aged(Cell { alive: true, age: 7 });
        assert_eq!(survivor, Cell { alive: true, age: 8 });
    }

    #[test]
    fn age_saturates_at_max() {
        let old = Cell { alive: true, age: MAX_AGE };
        assert_eq!(Cell::born_or_aged(old).age, MAX_AGE);
        let almost = Cell { alive: true, age: MAX_AGE - 1 };
        assert_eq!(Cell::born_or_aged(almost).age, MAX_AGE);
    }

    #[test]
    fn carried_dead_stays_dead() {
        assert_eq!(Cell::carried(Cell::dead()), Cell::dead());
    }

    #[test]
    fn carried_alive_ages() {
        let kept = Cell::carried(Cell { alive: true, age: 3 });
        assert_eq!(kept, Cell { alive: true, age: 4 });
    }
}
