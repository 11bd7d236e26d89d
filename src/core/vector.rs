use crate::core::math;

use num::traits::{Float, Signed};
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T> where T: Signed + Copy {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> where T: Signed + Copy {
    pub fn new(x: T, y: T, z: T) -> Vec3<T> {
        Vec3 {x: x, y: y, z: z}
    }

    pub fn zero() -> Vec3<T> {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn one() -> Vec3<T> {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn splat(v: T) -> Vec3<T> {
        Self::new(v, v, v)
    }

    pub fn comp_mult(&self, other: &Vec3<T>) -> Vec3<T> {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x)
    }

    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn is_exactly_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }
}

impl<T> Display for Vec3<T> where T: Signed + Copy + Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T> Add for Vec3<T> where T: Signed + Copy {
    type Output = Vec3<T>;
    fn add(self, rhs: Vec3<T>) -> Vec3<T> {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T> AddAssign for Vec3<T> where T: Signed + Copy {
    fn add_assign(&mut self, rhs: Vec3<T>) {
        *self = *self + rhs;
    }
}

impl<T> Sub for Vec3<T> where T: Signed + Copy {
    type Output = Vec3<T>;
    fn sub(self, rhs: Vec3<T>) -> Vec3<T> {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T> Mul<T> for Vec3<T> where T: Signed + Copy {
    type Output = Vec3<T>;
    fn mul(self, rhs: T) -> Vec3<T> {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T> MulAssign<T> for Vec3<T> where T: Signed + Copy {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;
    fn mul(self, rhs: Vec3<f64>) -> Vec3<f64> { rhs * self }
}

impl<T> Div<T> for Vec3<T> where T: Signed + Copy {
    type Output = Vec3<T>;
    fn div(self, rhs: T) -> Vec3<T> {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T> DivAssign<T> for Vec3<T> where T: Signed + Copy {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T> Neg for Vec3<T> where T: Signed + Copy {
    type Output = Vec3<T>;
    fn neg(self) -> Vec3<T> {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Vec3<T> where T: Float + Signed + Copy {
    pub fn magnitude(&self) -> T {
        T::sqrt(self.dot(self))
    }

    /// Unit vector in the same direction. A zero vector yields NaN components; callers that can
    /// see one should check `is_nearly_zero` first.
    pub fn normalized(&self) -> Vec3<T> {
        let length = self.magnitude();
        Self::new(self.x / length, self.y / length, self.z / length)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Vec3<f64> {
    /**
     * Determines whether a vec's magnitude is zero, within a small epsilon.
     */
    pub fn is_nearly_zero(&self) -> bool {
        math::is_nearly_zero(self.dot(self))
    }

    pub fn max_component(&self) -> f64 {
        f64::max(self.x, f64::max(self.y, self.z))
    }

    pub fn clamped_unit(&self) -> Vec3<f64> {
        Self::new(math::clamp_unit(self.x), math::clamp_unit(self.y), math::clamp_unit(self.z))
    }

    /**
     * Same as GLSL reflect.
     * See <https://www.opengl.org/sdk/docs/man4/html/reflect.xhtml>.
     *
     * @param I the incoming vector to reflect
     * @param N the normal at the surface over which to reflect; should be unit length
     * @returns the outgoing reflection vector
     */
    pub fn reflect(&self, n: &Vec3<f64>) -> Vec3<f64> {
        *self - (*n * (2.0 * n.dot(self)))
    }
}

impl From<[f64; 3]> for Vec3<f64> {
    fn from(v: [f64; 3]) -> Vec3<f64> {
        Self::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type V = Vec3<f64>;

    #[test]
    fn scalar_multiply_scales_every_component() {
        let v = V::new(1.0, -2.0, 3.0) * 2.0;
        assert_eq!(v, V::new(2.0, -4.0, 6.0));
        assert_eq!(0.5 * v, V::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = V::new(3.0, 4.0, 12.0).normalized();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reflect_mirrors_across_normal() {
        let n = V::new(0.0, 1.0, 0.0);
        let i = V::new(1.0, -1.0, 0.0);
        assert_eq!(i.reflect(&n), V::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = V::new(1.0, 0.0, 0.0);
        let y = V::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), V::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn compound_assignment_matches_binary_ops() {
        let mut v = V::new(1.0, 1.0, 1.0);
        v += V::new(1.0, 2.0, 3.0);
        v /= 2.0;
        v *= 4.0;
        assert_eq!(v, V::new(4.0, 6.0, 8.0));
    }

    #[test]
    fn clamped_unit_saturates() {
        let v = V::new(-0.5, 0.25, 1.5).clamped_unit();
        assert_eq!(v, V::new(0.0, 0.25, 1.0));
    }
}
