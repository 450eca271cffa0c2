/// A pixel coordinate: `x` counts columns, `y` counts rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
