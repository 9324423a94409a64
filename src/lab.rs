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
use crate::cie::{CieSpace, ValueRange};
use crate::err::SynthError;
use crate::matrix::Xyzd;
use pxfm::f_cbrt;

/// Rescales an XYZ value between white points component by component.
///
/// This is a plain diagonal scale in XYZ, not a von Kries or Bradford
/// chromatic adaptation.
#[inline]
pub fn adapt_white_point(xyz: Xyzd, from: Xyzd, to: Xyzd) -> Xyzd {
    xyz * (to / from)
}

/// CIE L*a*b* value.
#[repr(C)]
#[derive(Clone, Debug, Copy, Default, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// The forward Lab transfer function with its linear toe below
/// (6/29)^3.
#[inline]
fn lab_g(t: f64) -> f64 {
    if t >= 216.0 / 24389.0 {
        f_cbrt(t)
    } else {
        t * (841.0 / 108.0) + 4.0 / 29.0
    }
}

impl Lab {
    /// Encodes an XYZ value relative to `white`.
    ///
    /// Lightness is clamped into [0, 100] before the chroma axes are
    /// derived from it, so out-of-range luminance pulls a* and b* along
    /// with it.
    pub fn from_xyz(xyz: Xyzd, white: Xyzd) -> Lab {
        let fx = lab_g(xyz.x / white.x);
        let fy = lab_g(xyz.y / white.y);
        let fz = lab_g(xyz.z / white.z);
        let l = (116.0 * fy - 16.0).clamp(0.0, 100.0);
        let lunit = (l + 16.0) / 116.0;
        Lab {
            l,
            a: 500.0 * (fx - lunit),
            b: -200.0 * (fz - lunit),
        }
    }
}

/// Scans every corner of the space's domain box and returns the reach
/// of a* and b* there. Lightness is not ranged; it is always [0, 100].
pub fn lab_range(space: &CieSpace) -> Result<(ValueRange, ValueRange), SynthError> {
    let ranges = space.input_ranges();
    let ncomp = ranges.len();
    let white = space.white_point();
    let mut amin = 1000.0f64;
    let mut amax = -1000.0f64;
    let mut bmin = 1000.0f64;
    let mut bmax = -1000.0f64;
    for corner in 0..(1usize << ncomp) {
        let mut input = [0f64; 4];
        for (ch, r) in ranges.iter().enumerate() {
            input[ch] = if corner & (1 << ch) != 0 { r.max } else { r.min };
        }
        let xyz = space.concretize(&input[..ncomp])?;
        let lab = Lab::from_xyz(xyz, white);
        amin = amin.min(lab.a);
        amax = amax.max(lab.a);
        bmin = bmin.min(lab.b);
        bmax = bmax.max(lab.b);
    }
    Ok((ValueRange::new(amin, amax), ValueRange::new(bmin, bmax)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cie::{CieA, CieAbc, DecodeFn};
    use crate::matrix::WHITE_POINT_D50;

    #[test]
    fn transfer_branches_agree_at_the_knee() {
        let knee = 216.0 / 24389.0;
        let below = knee * (841.0 / 108.0) + 4.0 / 29.0;
        let above = f_cbrt(knee);
        assert!((below - above).abs() < 1e-12);
        assert!((above - 6.0 / 29.0).abs() < 1e-12);
    }

    #[test]
    fn lightness_clamps_for_bright_stimuli() {
        let lab = Lab::from_xyz(Xyzd::new(1.5, 1.5, 1.2), WHITE_POINT_D50);
        assert_eq!(lab.l, 100.0);
        let dark = Lab::from_xyz(Xyzd::new(0.0, 0.0, 0.0), WHITE_POINT_D50);
        assert_eq!(dark.l, 0.0);
    }

    #[test]
    fn white_adapts_to_white() {
        let d65 = Xyzd::new(0.9505, 1.0, 1.089);
        let adapted = adapt_white_point(d65, d65, WHITE_POINT_D50);
        assert_eq!(adapted, WHITE_POINT_D50);
    }

    #[test]
    fn achromatic_space_has_degenerate_chroma_range() {
        let space = CieSpace::A(CieA {
            decode: Box::new(|v| v),
            range: ValueRange::UNIT,
            white_point: Xyzd::new(0.9505, 1.0, 1.089),
        });
        let (ra, rb) = lab_range(&space).unwrap();
        assert!(ra.min.abs() < 1e-9 && ra.max.abs() < 1e-9);
        assert!(rb.min.abs() < 1e-9 && rb.max.abs() < 1e-9);
    }

    #[test]
    fn range_contains_every_corner() {
        let gamma = [2.2f64, 1.8, 1.0];
        let decode: [DecodeFn; 3] = gamma.map(|g| {
            Box::new(move |v: f64| pxfm::f_pow(v.max(0.0), g)) as DecodeFn
        });
        let space = CieSpace::Abc(CieAbc {
            decode,
            ranges: [
                ValueRange::UNIT,
                ValueRange::new(-0.2, 1.1),
                ValueRange::new(0.0, 2.0),
            ],
            matrix: None,
            white_point: WHITE_POINT_D50,
        });
        let (ra, rb) = lab_range(&space).unwrap();
        let ranges = space.input_ranges().to_vec();
        for corner in 0..8usize {
            let mut input = [0f64; 3];
            for (ch, r) in ranges.iter().enumerate() {
                input[ch] = if corner & (1 << ch) != 0 { r.max } else { r.min };
            }
            let lab = Lab::from_xyz(space.concretize(&input).unwrap(), space.white_point());
            assert!(lab.a >= ra.min - 1e-9 && lab.a <= ra.max + 1e-9);
            assert!(lab.b >= rb.min - 1e-9 && lab.b <= rb.max + 1e-9);
        }
    }
}
