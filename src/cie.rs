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
use crate::ctable::ColorTable;
use crate::err::SynthError;
use crate::matrix::{Matrix3d, Vector3d, Xyzd};

/// Per-channel transfer function of a source space.
pub type DecodeFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Closed interval of valid channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const UNIT: ValueRange = ValueRange { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> ValueRange {
        ValueRange { min, max }
    }

    #[inline]
    pub(crate) fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    /// Maps sample index `i` of an `n`-point grid onto the interval.
    #[inline]
    pub(crate) fn arg(&self, i: usize, n: usize) -> f64 {
        self.min + (self.max - self.min) * (i as f64) / ((n - 1) as f64)
    }

    /// Clamped unit position of `v` inside the interval.
    #[inline]
    pub(crate) fn to_unit(&self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((v - self.min) / span).clamp(0.0, 1.0)
    }

    #[inline]
    pub(crate) fn from_unit(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }
}

/// Single-channel source space. Concretization forces an achromatic
/// result: the white point's X and Z scaled by the decoded luminance.
pub struct CieA {
    pub decode: DecodeFn,
    pub range: ValueRange,
    pub white_point: Xyzd,
}

/// Three-channel source space with per-channel decode functions and an
/// optional matrix into XYZ. Without a matrix the decoded triple is the
/// XYZ value itself.
pub struct CieAbc {
    pub decode: [DecodeFn; 3],
    pub ranges: [ValueRange; 3],
    pub matrix: Option<Matrix3d>,
    pub white_point: Xyzd,
}

/// Three-channel table-based source space.
pub struct CieDef {
    pub decode: [DecodeFn; 3],
    pub ranges: [ValueRange; 3],
    /// Decoded-value interval mapped onto each table axis.
    pub table_ranges: [ValueRange; 3],
    pub table: ColorTable,
    /// Interval each unit table output denormalizes into.
    pub post_ranges: [ValueRange; 3],
    pub white_point: Xyzd,
}

/// Four-channel table-based source space.
pub struct CieDefg {
    pub decode: [DecodeFn; 4],
    pub ranges: [ValueRange; 4],
    pub table_ranges: [ValueRange; 4],
    pub table: ColorTable,
    pub post_ranges: [ValueRange; 3],
    pub white_point: Xyzd,
}

/// A device-independent source color space description.
pub enum CieSpace {
    A(CieA),
    Abc(CieAbc),
    Def(CieDef),
    Defg(CieDefg),
}

impl CieSpace {
    #[inline]
    pub fn channels(&self) -> usize {
        match self {
            CieSpace::A(_) => 1,
            CieSpace::Abc(_) | CieSpace::Def(_) => 3,
            CieSpace::Defg(_) => 4,
        }
    }

    #[inline]
    pub fn white_point(&self) -> Xyzd {
        match self {
            CieSpace::A(s) => s.white_point,
            CieSpace::Abc(s) => s.white_point,
            CieSpace::Def(s) => s.white_point,
            CieSpace::Defg(s) => s.white_point,
        }
    }

    #[inline]
    pub fn input_ranges(&self) -> &[ValueRange] {
        match self {
            CieSpace::A(s) => std::slice::from_ref(&s.range),
            CieSpace::Abc(s) => &s.ranges,
            CieSpace::Def(s) => &s.ranges,
            CieSpace::Defg(s) => &s.ranges,
        }
    }

    /// The decode functions and matrix of a space eligible for the
    /// tone-curve and matrix profile form.
    pub(crate) fn tone_matrix(&self) -> Option<(&[DecodeFn; 3], &Matrix3d, &[ValueRange; 3])> {
        match self {
            CieSpace::Abc(s) => s.matrix.as_ref().map(|m| (&s.decode, m, &s.ranges)),
            _ => None,
        }
    }

    /// Evaluates the space at `input` to an absolute XYZ value relative
    /// to the space's own white point. Inputs are clamped into their
    /// declared ranges first.
    ///
    /// The lookup table of a table-based shape must match the shape's
    /// arity; a mismatch is a [`SynthError::RangeCheck`].
    pub fn concretize(&self, input: &[f64]) -> Result<Xyzd, SynthError> {
        debug_assert_eq!(input.len(), self.channels());
        match self {
            CieSpace::A(s) => {
                let y = (s.decode)(s.range.clamp(input[0]));
                Ok(Xyzd::new(s.white_point.x * y, y, s.white_point.z * y))
            }
            CieSpace::Abc(s) => {
                let d = Vector3d {
                    v: [
                        (s.decode[0])(s.ranges[0].clamp(input[0])),
                        (s.decode[1])(s.ranges[1].clamp(input[1])),
                        (s.decode[2])(s.ranges[2].clamp(input[2])),
                    ],
                };
                Ok(match &s.matrix {
                    Some(m) => Xyzd::from_vector(m.mul_vector(d)),
                    None => Xyzd::from_vector(d),
                })
            }
            CieSpace::Def(s) => {
                if s.table.input_channels() != 3 {
                    return Err(SynthError::RangeCheck);
                }
                let dims = s.table.input_dims();
                let mut at = [0f32; 3];
                for ch in 0..3 {
                    let decoded = (s.decode[ch])(s.ranges[ch].clamp(input[ch]));
                    let t = s.table_ranges[ch].to_unit(decoded);
                    at[ch] = (t * (dims[ch] - 1) as f64) as f32;
                }
                let v = s.table.linear(&at);
                Ok(Xyzd::new(
                    s.post_ranges[0].from_unit(v.v[0] as f64),
                    s.post_ranges[1].from_unit(v.v[1] as f64),
                    s.post_ranges[2].from_unit(v.v[2] as f64),
                ))
            }
            CieSpace::Defg(s) => {
                if s.table.input_channels() != 4 {
                    return Err(SynthError::RangeCheck);
                }
                let dims = s.table.input_dims();
                let mut at = [0f32; 4];
                for ch in 0..4 {
                    let decoded = (s.decode[ch])(s.ranges[ch].clamp(input[ch]));
                    let t = s.table_ranges[ch].to_unit(decoded);
                    at[ch] = (t * (dims[ch] - 1) as f64) as f32;
                }
                let v = s.table.linear(&at);
                Ok(Xyzd::new(
                    s.post_ranges[0].from_unit(v.v[0] as f64),
                    s.post_ranges[1].from_unit(v.v[1] as f64),
                    s.post_ranges[2].from_unit(v.v[2] as f64),
                ))
            }
        }
    }
}
