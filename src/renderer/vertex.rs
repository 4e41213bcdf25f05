//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const ROAD: [f32; 4] = [0.267, 0.267, 0.267, 1.0];
    pub const LANE_MARK: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.3];
    pub const CAR: [f32; 4] = [0.867, 0.133, 0.133, 1.0];
    pub const CAR_NITRO: [f32; 4] = [1.0, 0.667, 0.0, 1.0];
    pub const WINDSHIELD: [f32; 4] = [0.267, 0.267, 0.267, 1.0];
    pub const HEADLIGHT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const SHIELD_RING: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const SAW: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
    pub const ZOMBIE: [f32; 4] = [0.267, 0.667, 0.267, 1.0];
    pub const ZOMBIE_FROZEN: [f32; 4] = [0.0, 0.733, 1.0, 1.0];
    pub const ZOMBIE_EYE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let vertices = [Vertex::new(1.0, 2.0, [0.0; 4]); 3];
        assert_eq!(as_bytes(&vertices).len(), 72);
    }
}
