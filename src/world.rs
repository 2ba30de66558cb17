// world.rs - Runtime-sized cell grid and the current/next buffer pair

use rand::Rng;

use crate::cell::Cell;

/// Row-major grid of cells, sized at construction. Coordinates outside the
/// grid read as dead cells; the world never wraps.
#[derive(Clone)]
pub struct World {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl World {
    pub fn new(width: i32, height: i32) -> World {
        World {
            width,
            height,
            cells: vec![Cell::dead(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Out-of-bounds reads yield a synthetic dead cell.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[(x + y * self.width) as usize]
        } else {
            Cell::dead()
        }
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells[(x + y * self.width) as usize] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::dead());
    }

    /// One cell in three starts alive, all at age 0.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell {
                alive: rng.gen_ratio(1, 3),
                age: 0,
            };
        }
    }
}

/// Double buffer: the published world is what the renderer reads, the
/// scratch world is written during a step, and `swap` flips the roles.
pub struct WorldBuffers {
    current: World,
    next: World,
}

impl WorldBuffers {
    pub fn new(width: i32, height: i32) -> WorldBuffers {
        WorldBuffers {
            current: World::new(width, height),
            next: World::new(width, height),
        }
    }

    pub fn current(&self) -> &World {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut World {
        &mut self.current
    }

    /// The readable published world together with the writable scratch.
    pub fn split(&mut self) -> (&World, &mut World) {
        (&self.current, &mut self.next)
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
