// Finds where the eraser tip touches the board, in texture space.
// Visual expectation: the eraser only bites while the tip is within reach of the board.

use glam::Vec3;

use crate::types::ContactSample;

/// The eraser's contact point: a short ray cast from `position` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tip {
    pub position: Vec3,
    pub direction: Vec3,
    /// How far the ray reaches; the height of the eraser pad.
    pub reach: f32,
}

/// A flat rectangular board. `origin` is the corner at texture (0,0);
/// `right` and `up` are the full edge vectors along u and v.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPlane {
    origin: Vec3,
    right: Vec3,
    up: Vec3,
}

impl BoardPlane {
    /// `right` and `up` must be perpendicular; u and v are projections onto them.
    pub fn new(origin: Vec3, right: Vec3, up: Vec3) -> Self {
        debug_assert!(
            right.dot(up).abs() <= 1e-4 * right.length() * up.length(),
            "board edges must be perpendicular"
        );
        Self { origin, right, up }
    }

    /// Board of the given size lying in the z = 0 plane, facing +z.
    pub fn upright(width: f32, height: f32) -> Self {
        Self::new(Vec3::ZERO, Vec3::X * width, Vec3::Y * height)
    }

    /// World-space point at texture coordinates (u, v).
    pub fn point_at(&self, u: f32, v: f32) -> Vec3 {
        self.origin + self.right * u + self.up * v
    }

    pub fn normal(&self) -> Vec3 {
        self.right.cross(self.up).normalize_or_zero()
    }

    /// Cast the tip's ray at the board. Misses when the ray is parallel, points
    /// away, falls short of the plane or lands outside the rectangle.
    pub fn raycast(&self, tip: &Tip) -> ContactSample {
        let normal = self.normal();
        let dir = tip.direction.normalize_or_zero();
        let denom = dir.dot(normal);
        if denom.abs() <= f32::EPSILON {
            return ContactSample::miss();
        }

        let distance = (self.origin - tip.position).dot(normal) / denom;
        if !(0.0..=tip.reach).contains(&distance) {
            return ContactSample::miss();
        }

        let local = tip.position + dir * distance - self.origin;
        let u = local.dot(self.right) / self.right.length_squared();
        let v = local.dot(self.up) / self.up.length_squared();
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return ContactSample::miss();
        }
        ContactSample::hit(u, v)
    }
}

#[cfg(test)]
#[path = "raycast_test.rs"]
mod tests;
