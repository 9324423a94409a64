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
use crate::err::SynthError;
use crate::matrix::Vector4f;
use std::ops::{Add, Mul, Sub};

#[inline]
fn lerp<T: Mul<Output = T> + Sub<Output = T> + Add<Output = T> + From<f32> + Copy>(
    a: T,
    b: T,
    t: T,
) -> T {
    a * (T::from(1.0) - t) + b * t
}

/// Multidimensional sample table for table-based color spaces.
///
/// Samples are packed row-major with the last input dimension advancing
/// fastest, `m` output components per grid node. Lookup coordinates are
/// fractional grid positions in `[0, dims[i] - 1]`; positions outside
/// that range violate the caller contract.
#[derive(Debug, Clone)]
pub struct ColorTable {
    dims: [usize; 4],
    n: usize,
    m: usize,
    samples: Vec<f32>,
}

impl ColorTable {
    /// Builds a 3-D table. `samples` must hold
    /// `dims[0] * dims[1] * dims[2] * m` floats.
    pub fn new_3d(dims: [usize; 3], m: usize, samples: Vec<f32>) -> Result<ColorTable, SynthError> {
        Self::new([dims[0], dims[1], dims[2], 1], 3, m, samples)
    }

    /// Builds a 4-D table. `samples` must hold
    /// `dims[0] * dims[1] * dims[2] * dims[3] * m` floats.
    pub fn new_4d(dims: [usize; 4], m: usize, samples: Vec<f32>) -> Result<ColorTable, SynthError> {
        Self::new(dims, 4, m, samples)
    }

    fn new(
        dims: [usize; 4],
        n: usize,
        m: usize,
        samples: Vec<f32>,
    ) -> Result<ColorTable, SynthError> {
        if !(3..=4).contains(&m) {
            return Err(SynthError::RangeCheck);
        }
        if dims[..n].iter().any(|&d| d == 0) {
            return Err(SynthError::RangeCheck);
        }
        let nodes = dims[..n].iter().product::<usize>();
        if samples.len() != nodes * m {
            return Err(SynthError::RangeCheck);
        }
        Ok(ColorTable { dims, n, m, samples })
    }

    #[inline]
    pub fn input_dims(&self) -> &[usize] {
        &self.dims[..self.n]
    }

    #[inline]
    pub fn input_channels(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn output_components(&self) -> usize {
        self.m
    }

    #[inline]
    fn row(&self, start: usize) -> Vector4f {
        let k = &self.samples[start..start + self.m];
        if self.m == 4 {
            Vector4f {
                v: [k[0], k[1], k[2], k[3]],
            }
        } else {
            Vector4f {
                v: [k[0], k[1], k[2], 0.0],
            }
        }
    }

    #[inline]
    fn fetch3(&self, x: i32, y: i32, z: i32) -> Vector4f {
        let start =
            ((x as usize * self.dims[1] + y as usize) * self.dims[2] + z as usize) * self.m;
        self.row(start)
    }

    #[inline]
    fn fetch4(&self, x: i32, y: i32, z: i32, w: i32) -> Vector4f {
        let start = (((x as usize * self.dims[1] + y as usize) * self.dims[2] + z as usize)
            * self.dims[3]
            + w as usize)
            * self.m;
        self.row(start)
    }

    /// Returns the grid node at the truncated coordinates.
    pub fn nearest(&self, at: &[f32]) -> Vector4f {
        debug_assert_eq!(at.len(), self.n);
        debug_assert!(self.in_range(at));
        if self.n == 3 {
            self.fetch3(at[0] as i32, at[1] as i32, at[2] as i32)
        } else {
            self.fetch4(at[0] as i32, at[1] as i32, at[2] as i32, at[3] as i32)
        }
    }

    /// Multilinear blend over the cell's corner nodes.
    pub fn linear(&self, at: &[f32]) -> Vector4f {
        debug_assert_eq!(at.len(), self.n);
        debug_assert!(self.in_range(at));
        if self.n == 3 {
            self.trilinear(at[0], at[1], at[2])
        } else {
            self.quadlinear(at[0], at[1], at[2], at[3])
        }
    }

    #[inline]
    fn in_range(&self, at: &[f32]) -> bool {
        at.iter()
            .zip(self.dims.iter())
            .all(|(&p, &d)| p >= 0.0 && p <= (d - 1) as f32)
    }

    #[inline]
    fn trilinear(&self, lin_x: f32, lin_y: f32, lin_z: f32) -> Vector4f {
        let x = lin_x.floor() as i32;
        let y = lin_y.floor() as i32;
        let z = lin_z.floor() as i32;

        let x_n = lin_x.ceil() as i32;
        let y_n = lin_y.ceil() as i32;
        let z_n = lin_z.ceil() as i32;

        let x_d = Vector4f::from(lin_x - x as f32);
        let y_d = Vector4f::from(lin_y - y as f32);
        let z_d = Vector4f::from(lin_z - z as f32);

        let c00 = lerp(self.fetch3(x, y, z), self.fetch3(x_n, y, z), x_d);
        let c10 = lerp(self.fetch3(x, y_n, z), self.fetch3(x_n, y_n, z), x_d);
        let c01 = lerp(self.fetch3(x, y, z_n), self.fetch3(x_n, y, z_n), x_d);
        let c11 = lerp(self.fetch3(x, y_n, z_n), self.fetch3(x_n, y_n, z_n), x_d);

        let c0 = lerp(c00, c10, y_d);
        let c1 = lerp(c01, c11, y_d);

        lerp(c0, c1, z_d)
    }

    #[inline]
    fn quadlinear(&self, lin_x: f32, lin_y: f32, lin_z: f32, lin_w: f32) -> Vector4f {
        let x = lin_x.floor() as i32;
        let y = lin_y.floor() as i32;
        let z = lin_z.floor() as i32;
        let w = lin_w.floor() as i32;

        let x_n = lin_x.ceil() as i32;
        let y_n = lin_y.ceil() as i32;
        let z_n = lin_z.ceil() as i32;
        let w_n = lin_w.ceil() as i32;

        let x_d = Vector4f::from(lin_x - x as f32);
        let y_d = Vector4f::from(lin_y - y as f32);
        let z_d = Vector4f::from(lin_z - z as f32);
        let w_d = Vector4f::from(lin_w - w as f32);

        let r_x1 = lerp(self.fetch4(x, y, z, w), self.fetch4(x_n, y, z, w), x_d);
        let r_x2 = lerp(self.fetch4(x, y_n, z, w), self.fetch4(x_n, y_n, z, w), x_d);
        let r_y1 = lerp(r_x1, r_x2, y_d);
        let r_x3 = lerp(self.fetch4(x, y, z_n, w), self.fetch4(x_n, y, z_n, w), x_d);
        let r_x4 = lerp(self.fetch4(x, y_n, z_n, w), self.fetch4(x_n, y_n, z_n, w), x_d);
        let r_y2 = lerp(r_x3, r_x4, y_d);
        let r_z1 = lerp(r_y1, r_y2, z_d);

        let r_x1 = lerp(self.fetch4(x, y, z, w_n), self.fetch4(x_n, y, z, w_n), x_d);
        let r_x2 = lerp(self.fetch4(x, y_n, z, w_n), self.fetch4(x_n, y_n, z, w_n), x_d);
        let r_y1 = lerp(r_x1, r_x2, y_d);
        let r_x3 = lerp(self.fetch4(x, y, z_n, w_n), self.fetch4(x_n, y, z_n, w_n), x_d);
        let r_x4 = lerp(
            self.fetch4(x, y_n, z_n, w_n),
            self.fetch4(x_n, y_n, z_n, w_n),
            x_d,
        );
        let r_y2 = lerp(r_x3, r_x4, y_d);
        let r_z2 = lerp(r_y1, r_y2, z_d);
        lerp(r_z1, r_z2, w_d)
    }
}
