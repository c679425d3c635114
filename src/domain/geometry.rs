// Plane geometry shared by ships and cannonballs.

/// World-space point in pixels. `+x` is right, `+y` is down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Straight-line integration along `angle` (radians) at `speed` px/s for `dt` seconds.
pub fn advance_position(position: Position, angle: f64, speed: f64, dt: f64) -> Position {
    Position {
        x: position.x + angle.cos() * speed * dt,
        y: position.y + angle.sin() * speed * dt,
    }
}

/// Half-open bounds test against `[0, width) x [0, height)`.
pub fn in_bounds(position: Position, width: f64, height: f64) -> bool {
    position.x >= 0.0 && position.x < width && position.y >= 0.0 && position.y < height
}

/// Circle-circle overlap, touching counts as a hit.
pub fn circles_overlap(a: Position, a_radius: f64, b: Position, b_radius: f64) -> bool {
    let reach = a_radius + b_radius;
    a.distance_sq(b) <= reach * reach
}
