// patterns.rs - Classic seed patterns stamped into the world

use crate::cell::Cell;
use crate::world::World;

pub struct Pattern {
    pub name: &'static str,
    /// (x, y) offsets; `apply` centers the bounding box on the target.
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(2, 0), (1, 1), (2, 1), (0, 2), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Clears the world and stamps the pattern with its bounding box centered on
/// `(center_x, center_y)`. Cells falling outside the world are dropped.
pub fn apply(world: &mut World, pattern: &Pattern, center_x: i32, center_y: i32) {
    world.clear();

    let min_x = pattern.cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let max_x = pattern.cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let min_y = pattern.cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let max_y = pattern.cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
    let offset_x = center_x - (min_x + (max_x - min_x) / 2);
    let offset_y = center_y - (min_y + (max_y - min_y) / 2);

    for &(x, y) in pattern.cells {
        world.set(x + offset_x, y + offset_y, Cell { alive: true, age: 0 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_name(name: &str) -> &'static Pattern {
        PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    fn live_cells(world: &World) -> Vec<(i32, i32)> {
        let mut live = Vec::new();
        for y in 0..world.height() {
            for x in 0..world.width() {
                if world.get(x, y).alive {
                    live.push((x, y));
                }
            }
        }
        live
    }

    #[test]
    fn blinker_stamps_centered() {
        let mut world = World::new(11, 11);
        apply(&mut world, by_name("Blinker"), 5, 5);
        assert_eq!(live_cells(&world), vec![(4, 5), (5, 5), (6, 5)]);
        assert_eq!(world.get(4, 5).age, 0);
    }

    #[test]
    fn apply_replaces_previous_contents() {
        let mut world = World::new(20, 20);
        world.set(0, 0, Cell { alive: true, age: 3 });
        apply(&mut world, by_name("Glider"), 10, 10);
        assert!(!world.get(0, 0).alive);
    }

    #[test]
    fn out_of_world_cells_are_dropped() {
        // The gun is far wider than this world; apply must not panic.
        let mut world = World::new(4, 4);
        apply(&mut world, by_name("Gosper Glider Gun"), 2, 2);
        assert!(live_cells(&world).len() <= 4 * 4);
    }

    #[test]
    fn glider_travels_one_cell_per_period() {
        use crate::sim;
        use crate::world::WorldBuffers;

        let mut buffers = WorldBuffers::new(12, 12);
        apply(buffers.current_mut(), by_name("Glider"), 4, 4);
        let before = live_cells(buffers.current());
        for _ in 0..4 {
            sim::step(&mut buffers);
        }
        let after = live_cells(buffers.current());
        let shifted: Vec<(i32, i32)> = before.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(after, shifted);
    }
}
