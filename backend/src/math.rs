#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    /// Number of f32 components, as handed to `glVertexAttribPointer`.
    pub const COMPONENTS: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn vec2_is_two_packed_floats() {
        assert_eq!(mem::size_of::<Vec2>(), 2 * mem::size_of::<f32>());
        assert_eq!(mem::align_of::<Vec2>(), mem::align_of::<f32>());
        assert_eq!(Vec2::COMPONENTS, 2);
    }
}
