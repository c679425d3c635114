/// Playable area. Both axes start at 0.

#[derive(Debug, Clone, Copy)]
pub struct MapTuning {
    /// Width in pixels (x is valid in `[0, width)`).
    pub width: f64,

    /// Height in pixels (y is valid in `[0, height)`).
    pub height: f64,
}

impl Default for MapTuning {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 900.0,
        }
    }
}
