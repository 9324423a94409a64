/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use num_traits::AsPrimitive;
use std::ops::{Add, Div, Mul, Sub};

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector3<T> {
    pub v: [T; 3],
}

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector4<T> {
    pub v: [T; 4],
}

pub type Vector4f = Vector4<f32>;

pub type Vector3d = Vector3<f64>;

impl<T> PartialEq<Self> for Vector4<T>
where
    T: AsPrimitive<f32>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f32 = 0.0001f32;
        let dx = (self.v[0].as_() - other.v[0].as_()).abs();
        let dy = (self.v[1].as_() - other.v[1].as_()).abs();
        let dz = (self.v[2].as_() - other.v[2].as_()).abs();
        let dw = (self.v[3].as_() - other.v[3].as_()).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE && dw < TOLERANCE
    }
}

impl<T> Mul<Vector4<T>> for Vector4<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Vector4<T>;

    #[inline]
    fn mul(self, rhs: Vector4<T>) -> Self::Output {
        Self {
            v: [
                self.v[0] * rhs.v[0],
                self.v[1] * rhs.v[1],
                self.v[2] * rhs.v[2],
                self.v[3] * rhs.v[3],
            ],
        }
    }
}

impl<T> From<T> for Vector4<T>
where
    T: Copy,
{
    fn from(value: T) -> Self {
        Self {
            v: [value, value, value, value],
        }
    }
}

impl<T> Add<Vector4<T>> for Vector4<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Vector4<T>;

    #[inline]
    fn add(self, rhs: Vector4<T>) -> Self::Output {
        Self {
            v: [
                self.v[0] + rhs.v[0],
                self.v[1] + rhs.v[1],
                self.v[2] + rhs.v[2],
                self.v[3] + rhs.v[3],
            ],
        }
    }
}

impl<T> Sub<Vector4<T>> for Vector4<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vector4<T>;

    #[inline]
    fn sub(self, rhs: Vector4<T>) -> Self::Output {
        Self {
            v: [
                self.v[0] - rhs.v[0],
                self.v[1] - rhs.v[1],
                self.v[2] - rhs.v[2],
                self.v[3] - rhs.v[3],
            ],
        }
    }
}

/// Matrix math helper
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3d {
    pub v: [[f64; 3]; 3],
}

impl Matrix3d {
    pub const IDENTITY: Matrix3d = Matrix3d {
        v: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn mul_vector(&self, other: Vector3d) -> Vector3d {
        let x = self.v[0][1] * other.v[1] + self.v[0][2] * other.v[2] + self.v[0][0] * other.v[0];
        let y = self.v[1][0] * other.v[0] + self.v[1][1] * other.v[1] + self.v[1][2] * other.v[2];
        let z = self.v[2][0] * other.v[0] + self.v[2][1] * other.v[1] + self.v[2][2] * other.v[2];
        Vector3d { v: [x, y, z] }
    }

    /// Column `j` as a vector, the image of the j-th basis channel.
    #[inline]
    pub const fn column(&self, j: usize) -> Vector3d {
        Vector3d {
            v: [self.v[0][j], self.v[1][j], self.v[2][j]],
        }
    }
}

/// Holds CIE XYZ representation
#[repr(C)]
#[derive(Clone, Debug, Copy, Default)]
pub struct Xyzd {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// The reference white all synthesized profiles declare, as profile
/// headers encode it.
pub const WHITE_POINT_D50: Xyzd = Xyzd::new(0.9642, 1.0, 0.8249);

impl PartialEq<Self> for Xyzd {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f64 = 0.0001;
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dz = (self.z - other.z).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE
    }
}

impl Xyzd {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_vector(v: Vector3d) -> Self {
        Self {
            x: v.v[0],
            y: v.v[1],
            z: v.v[2],
        }
    }
}

impl Mul<Xyzd> for Xyzd {
    type Output = Xyzd;

    #[inline]
    fn mul(self, rhs: Xyzd) -> Self::Output {
        Xyzd {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Div<Xyzd> for Xyzd {
    type Output = Xyzd;

    #[inline]
    fn div(self, rhs: Xyzd) -> Self::Output {
        Xyzd {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_columns_are_basis_images() {
        let m = Matrix3d {
            v: [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]],
        };
        let e1 = m.mul_vector(Vector3d { v: [0.0, 1.0, 0.0] });
        assert_eq!(e1.v, m.column(1).v);
    }

    #[test]
    fn identity_preserves_vectors() {
        let v = Vector3d { v: [0.3, 0.7, 0.1] };
        let r = Matrix3d::IDENTITY.mul_vector(v);
        assert_eq!(r.v, v.v);
    }
}
