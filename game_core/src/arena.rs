use glam::Vec2;

/// Playing field. Immutable for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest x an entity of `size` may occupy
    pub fn max_x(&self, size: Vec2) -> f32 {
        (self.width - size.x).max(0.0)
    }

    /// Largest y an entity of `size` may occupy
    pub fn max_y(&self, size: Vec2) -> f32 {
        (self.height - size.y).max(0.0)
    }

    /// Clamp a position to [0, dimension - size] on both axes
    pub fn clamp(&self, pos: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(0.0, self.max_x(size)),
            pos.y.clamp(0.0, self.max_y(size)),
        )
    }

    pub fn contains(&self, pos: Vec2, size: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.max_x(size) && pos.y >= 0.0 && pos.y <= self.max_y(size)
    }
}
