// sim.rs - One-generation transition over the whole grid

use crate::cell::Cell;
use crate::world::{World, WorldBuffers};

const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Writes the next generation of `current` into `next`. Out-of-bounds
/// neighbours count as dead. Rule precedence: two neighbours carries the
/// cell forward, three makes it alive, anything else kills it.
pub fn advance(current: &World, next: &mut World) {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    for y in 0..current.height() {
        for x in 0..current.width() {
            let mut alive_neighbours = 0;
            for (dx, dy) in NEIGHBOUR_OFFSETS {
                if current.get(x + dx, y + dy).alive {
                    alive_neighbours += 1;
                }
            }

            let cell = current.get(x, y);
            let transitioned = match alive_neighbours {
                2 => Cell::carried(cell),
                3 => Cell::born_or_aged(cell),
                _ => Cell::dead(),
            };
            next.set(x, y, transitioned);
        }
    }
}

/// Advances the buffer pair one generation and publishes the result.
pub fn step(buffers: &mut WorldBuffers) {
    let (current, next) = buffers.split();
    advance(current, next);
    buffers.swap();
}
