// render.rs - Writes the visible cells into the frame's pixel buffer

use egui::{Color32, ColorImage};

use crate::camera::Camera;
use crate::cell::{Cell, MAX_AGE};
use crate::world::World;

/// Dead cells render as a very dark blue.
pub const DEAD_COLOR: Color32 = Color32::from_rgb(0, 0, 0x22);

/// Live cells ramp green -> yellow over their first 255 generations, then
/// yellow -> red up to `MAX_AGE`.
fn cell_color(cell: Cell) -> Color32 {
    if !cell.alive {
        return DEAD_COLOR;
    }
    if cell.age <= 255 {
        Color32::from_rgb(cell.age as u8, 255, 0)
    } else {
        Color32::from_rgb(255, (MAX_AGE - cell.age) as u8, 0)
    }
}

/// Paints one color per screen pixel inside the camera's visible rectangle.
/// Pixels outside it keep whatever the frame already held. `worldX` is
/// `left + pixelX / scale` with truncating division, so each world cell
/// covers a `scale`-pixel square.
pub fn draw_world(world: &World, camera: &Camera, frame: &mut ColorImage) {
    let frame_width = frame.size[0] as i32;
    let frame_height = frame.size[1] as i32;
    let visible = camera.visible();
    let scale = camera.scale();

    let x_start = visible.x_start.max(0);
    let x_end = visible.x_end.min(frame_width);
    let y_start = visible.y_start.max(0);
    let y_end = visible.y_end.min(frame_height);

    for y in y_start..y_end {
        let world_y = camera.top() + y / scale;
        let row = (y * frame_width) as usize;
        for x in x_start..x_end {
            let world_x = camera.left() + x / scale;
            frame.pixels[row + x as usize] = cell_color(world.get(world_x, world_y));
        }
    }
}
