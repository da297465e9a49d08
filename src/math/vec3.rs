use std::ops::{Add, AddAssign, Div, Mul, Sub};

use super::Axis;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotates about the X axis. `x` is left unchanged.
    pub fn rotate_x(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    /// Rotates about the Y axis. `y` is left unchanged.
    pub fn rotate_y(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotates about the Z axis. `z` is left unchanged.
    pub fn rotate_z(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    /// Rotates about the given world axis through the origin.
    pub fn rotate(&self, axis: Axis, angle: f32) -> Self {
        match axis {
            Axis::X => self.rotate_x(angle),
            Axis::Y => self.rotate_y(angle),
            Axis::Z => self.rotate_z(angle),
        }
    }

    /// Rotates about an axis parallel to `axis` that passes through `pivot`.
    pub fn rotate_about(&self, axis: Axis, angle: f32, pivot: Vec3) -> Self {
        (*self - pivot).rotate(axis, angle) + pivot
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    pub fn distance(&self, other: Self) -> f32 {
        (*self - other).magnitude()
    }

    /// True only when every component is exactly zero (either sign).
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Scalar division of a vector.
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotate_y_quarter_turn_moves_x_into_negative_z() {
        let v = Vec3::new(1.0, 2.0, 0.0).rotate_y(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_x_quarter_turn_moves_y_into_z() {
        let v = Vec3::new(3.0, 1.0, 0.0).rotate_x(FRAC_PI_2);
        assert_relative_eq!(v.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_z_quarter_turn_moves_x_into_y() {
        let v = Vec3::new(1.0, 0.0, 5.0).rotate_z(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn rotation_preserves_length_for_every_axis() {
        let v = Vec3::new(1.5, -2.0, 7.25);
        for axis in Axis::ALL {
            for step in 0..16 {
                let angle = step as f32 * PI / 8.0 - PI;
                assert_relative_eq!(
                    v.rotate(axis, angle).magnitude(),
                    v.magnitude(),
                    epsilon = 1e-4
                );
            }
        }
    }

    #[test]
    fn rotate_about_keeps_distance_to_pivot() {
        let pivot = Vec3::new(0.0, 0.0, 20.0);
        let v = Vec3::new(5.0, 5.0, 25.0);
        for axis in Axis::ALL {
            let rotated = v.rotate_about(axis, 0.7, pivot);
            assert_relative_eq!(rotated.distance(pivot), v.distance(pivot), epsilon = 1e-4);
        }
    }

    #[test]
    fn is_zero_accepts_negative_zero() {
        assert!(Vec3::new(-0.0, 0.0, -0.0).is_zero());
        assert!(!Vec3::new(0.0, f32::MIN_POSITIVE, 0.0).is_zero());
    }
}
