//! Module for simple sprite motion: stepping, bouncing and clamping inside a
//! rectangular board. Positions are in whole character cells.

/// The rectangular playing area. (0, 0) is the top left corner; valid
/// positions are `0..width` by `0..height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    /// Whether the given position lies inside the board.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

/// A point-sized moving object with a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mover {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
    /// Cleared once the mover leaves the board via [`Mover::fly`]. Callers
    /// stop drawing invisible movers.
    pub visible: bool,
}

impl Mover {
    pub fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            visible: true,
        }
    }

    /// Moves one step along the current velocity, ignoring the board.
    pub fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    /// Moves one step, reflecting the velocity on any board edge that would
    /// be crossed. The position is clamped back inside the board, so a mover
    /// that starts inside stays inside.
    pub fn bounce(&mut self, bounds: BoundingBox) {
        self.step();
        if !(0..bounds.width).contains(&self.x) {
            self.dx = -self.dx;
            self.x = self.x.clamp(0, bounds.width - 1);
        }
        if !(0..bounds.height).contains(&self.y) {
            self.dy = -self.dy;
            self.y = self.y.clamp(0, bounds.height - 1);
        }
    }

    /// Moves horizontally by `dx`, clamped to the board. Paddle-style.
    pub fn slide(&mut self, bounds: BoundingBox, dx: i32) {
        self.x = (self.x + dx).clamp(0, bounds.width - 1);
    }

    /// Moves one step along the current velocity; once the mover exits the
    /// board it becomes invisible. Projectile-style.
    pub fn fly(&mut self, bounds: BoundingBox) {
        self.step();
        if !bounds.contains(self.x, self.y) {
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: BoundingBox = BoundingBox {
        width: 10,
        height: 6,
    };

    #[test]
    fn bounce_reflects_off_the_right_wall() {
        let mut ball = Mover::new(9, 2, 1, 0);
        ball.bounce(BOARD);
        assert_eq!((ball.x, ball.dx), (9, -1));
        ball.bounce(BOARD);
        assert_eq!((ball.x, ball.dx), (8, -1));
    }

    #[test]
    fn bounce_reflects_both_axes_in_a_corner() {
        let mut ball = Mover::new(0, 0, -1, -1);
        ball.bounce(BOARD);
        assert_eq!((ball.x, ball.y), (0, 0));
        assert_eq!((ball.dx, ball.dy), (1, 1));
    }

    #[test]
    fn slide_clamps_at_the_edges() {
        let mut bat = Mover::new(8, 5, 0, 0);
        bat.slide(BOARD, 5);
        assert_eq!(bat.x, 9);
        bat.slide(BOARD, -100);
        assert_eq!(bat.x, 0);
    }

    #[test]
    fn fly_hides_the_mover_past_the_edge() {
        let mut missile = Mover::new(8, 3, 2, 0);
        missile.fly(BOARD);
        assert!(!missile.visible);
        assert_eq!(missile.x, 10);
    }

    #[test]
    fn fly_keeps_the_mover_visible_inside() {
        let mut missile = Mover::new(2, 3, 2, 0);
        missile.fly(BOARD);
        assert!(missile.visible);
    }
}
