//! Small geometry types for world positions.
//!
//! Catalog locations carry a flat 2D target point; live characters exist at
//! a 3D position whose depth component is owned by the renderer and must be
//! preserved when the world moves them around. Two plain structs cover both.

use serde::{Deserialize, Serialize};

/// A 2D point, used for catalog target positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Vec2 {
    /// Create a 2D point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 3D point, used for live character positions.
///
/// The `z` component is depth/draw-order and is never produced by the
/// event pipeline; it only ever carries a character's existing depth along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
    /// Depth coordinate, preserved across movement.
    pub z: f32,
}

impl Vec3 {
    /// Create a 3D point.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Combine a 2D target with an existing depth component.
    pub const fn from_xy(xy: Vec2, z: f32) -> Self {
        Self { x: xy.x, y: xy.y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
    }
}
