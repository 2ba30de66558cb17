// camera.rs - Scrollable viewport over the world, clamped to world bounds

/// Screen-pixel ranges that map onto cells which actually exist. Pixels
/// outside this rectangle have no world cell behind them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleRect {
    pub x_start: i32,
    pub x_end: i32,
    pub y_start: i32,
    pub y_end: i32,
}

#[derive(Clone, Debug)]
pub struct Camera {
    center_x: i32,
    center_y: i32,
    scale: i32,
    screen_width: i32,
    screen_height: i32,
    world_width: i32,
    world_height: i32,
    left: i32,
    top: i32,
    visible: VisibleRect,
}

impl Camera {
    /// Starts with the viewport at the world origin, like the initial
    /// screen-sized window the user sees before panning.
    pub fn new(
        screen_width: i32,
        screen_height: i32,
        world_width: i32,
        world_height: i32,
        scale: i32,
    ) -> Camera {
        let scale = scale.max(1);
        let mut camera = Camera {
            center_x: 0,
            center_y: 0,
            scale,
            screen_width,
            screen_height,
            world_width,
            world_height,
            left: 0,
            top: 0,
            visible: VisibleRect::default(),
        };
        camera.set_center(screen_width / scale / 2, screen_height / scale / 2);
        camera
    }

    pub fn center(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// World x coordinate of the leftmost on-screen column.
    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn visible(&self) -> VisibleRect {
        self.visible
    }

    fn clamp_axis(target: i32, half_extent: i32, world_extent: i32) -> i32 {
        if half_extent * 2 >= world_extent {
            // Viewport covers the whole axis: pin to the world midpoint.
            world_extent / 2
        } else {
            target.clamp(half_extent, world_extent - half_extent)
        }
    }

    /// Moves the viewport center, clamped so the visible rectangle never
    /// extends past the world on any side it can avoid.
    pub fn set_center(&mut self, x: i32, y: i32) {
        let half_width = self.screen_width / self.scale / 2;
        let half_height = self.screen_height / self.scale / 2;
        self.center_x = Camera::clamp_axis(x, half_width, self.world_width);
        self.center_y = Camera::clamp_axis(y, half_height, self.world_height);
        self.left = self.center_x - half_width;
        self.top = self.center_y - half_height;
        self.recompute_visible();
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.set_center(self.center_x + dx, self.center_y + dy);
    }

    /// Changes pixels-per-cell (minimum 1). The clamp bounds depend on the
    /// scale, so the center and visible rectangle are recomputed together.
    pub fn set_scale(&mut self, scale: i32) {
        self.scale = scale.max(1);
        self.set_center(self.center_x, self.center_y);
    }

    /// Intersects the screen rectangle with the world's mapped pixel extent,
    /// per axis. When the world is smaller than the screen only the middle
    /// band of pixels has cells behind it.
    fn recompute_visible(&mut self) {
        let x_start = (-self.left * self.scale).max(0);
        let x_end = ((self.world_width - self.left) * self.scale).min(self.screen_width);
        let y_start = (-self.top * self.scale).max(0);
        let y_end = ((self.world_height - self.top) * self.scale).min(self.screen_height);
        self.visible = VisibleRect {
            x_start,
            x_end: x_end.max(x_start),
            y_start,
            y_end: y_end.max(y_start),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_center_is_untouched() {
        let mut camera = Camera::new(800, 600, 2000, 2000, 1);
        camera.set_center(1000, 900);
        assert_eq!(camera.center(), (1000, 900));
        camera.set_center(1000, 900);
        assert_eq!(camera.center(), (1000, 900), "clamp must be idempotent");
    }

    #[test]
    fn out_of_range_center_clamps_to_valid_band() {
        let mut camera = Camera::new(800, 600, 2000, 2000, 1);
        camera.set_center(-50, 5000);
        assert_eq!(camera.center(), (400, 2000 - 300));
        camera.set_center(2000, 0);
        assert_eq!(camera.center(), (2000 - 400, 300));
    }

    #[test]
    fn pan_matches_set_center() {
        let mut panned = Camera::new(800, 600, 2000, 2000, 1);
        panned.set_center(700, 700);
        let mut centered = panned.clone();
        panned.pan(30, -10);
        centered.set_center(730, 690);
        assert_eq!(panned.center(), centered.center());
        assert_eq!(panned.visible(), centered.visible());
    }

    #[test]
    fn large_world_fills_the_whole_screen() {
        let camera = Camera::new(800, 600, 2000, 2000, 1);
        assert_eq!(
            camera.visible(),
            VisibleRect { x_start: 0, x_end: 800, y_start: 0, y_end: 600 }
        );
        assert_eq!((camera.left(), camera.top()), (0, 0));
    }

    #[test]
    fn small_world_pins_center_and_shrinks_visible_band() {
        let mut camera = Camera::new(800, 600, 10, 2000, 1);
        camera.set_center(9999, 300);
        // x axis is degenerate: the center pins to the world midpoint and
        // only a 10-pixel band of the screen maps onto cells.
        assert_eq!(camera.center().0, 5);
        assert_eq!(camera.left(), 5 - 400);
        assert_eq!(camera.visible().x_start, 395);
        assert_eq!(camera.visible().x_end, 405);
        // y axis still clamps normally
        assert_eq!(camera.visible().y_start, 0);
        assert_eq!(camera.visible().y_end, 600);
    }

    #[test]
    fn scale_floor_is_one() {
        let mut camera = Camera::new(800, 600, 2000, 2000, 1);
        camera.set_scale(0);
        assert_eq!(camera.scale(), 1);
        camera.set_scale(-3);
        assert_eq!(camera.scale(), 1);
    }

    #[test]
    fn zooming_reclamps_the_center() {
        let mut camera = Camera::new(800, 600, 2000, 2000, 1);
        camera.set_center(0, 0);
        assert_eq!(camera.center(), (400, 300));
        // At 2 px per cell the viewport spans half as many cells, so the
        // same corner target clamps to a tighter band.
        camera.set_scale(2);
        assert_eq!(camera.center(), (400, 300));
        assert_eq!((camera.left(), camera.top()), (200, 150));
        assert_eq!(
            camera.visible(),
            VisibleRect { x_start: 0, x_end: 800, y_start: 0, y_end: 600 }
        );
    }
}
