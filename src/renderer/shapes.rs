//! Triangle-list primitives in screen pixels

use std::f32::consts::TAU;

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering a quad given in winding order
fn push_quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, c, d, a] {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

/// Axis-aligned rectangle centered on `center`
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [
            center + Vec2::new(-half.x, -half.y),
            center + Vec2::new(half.x, -half.y),
            center + Vec2::new(half.x, half.y),
            center + Vec2::new(-half.x, half.y),
        ],
        color,
    );
    vertices
}

/// Rectangle in a local frame that is rotated by `angle` around `origin`.
///
/// `offset` is the rectangle's center in the local frame; positive angles turn
/// clockwise on screen (Y grows downward).
pub fn rotated_rect(
    origin: Vec2,
    angle: f32,
    offset: Vec2,
    size: Vec2,
    color: [f32; 4],
) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle);
    let half = size / 2.0;
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| origin + rot.rotate(offset + c));

    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, corners, color);
    vertices
}

/// Unit vectors at the two ends of segment `i` of `segments`
fn arc_step(i: u32, segments: u32) -> (Vec2, Vec2) {
    let step = TAU / segments as f32;
    (
        Vec2::from_angle(i as f32 * step),
        Vec2::from_angle((i + 1) as f32 * step),
    )
}

/// Filled disc as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let (a, b) = arc_step(i, segments);
        for p in [center, center + a * radius, center + b * radius] {
            out.push(Vertex::new(p.x, p.y, color));
        }
    }
    out
}

/// Annulus between `inner` and `outer` radii
pub fn ring(center: Vec2, inner: f32, outer: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        let (a, b) = arc_step(i, segments);
        push_quad(
            &mut out,
            [center + a * inner, center + a * outer, center + b * outer, center + b * inner],
            color,
        );
    }
    out
}
