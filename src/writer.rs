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

#[inline]
pub(crate) fn write_u16_be(into: &mut Vec<u8>, value: u16) {
    into.extend_from_slice(&value.to_be_bytes());
}

#[inline]
pub(crate) fn write_u32_be(into: &mut Vec<u8>, value: u32) {
    into.extend_from_slice(&value.to_be_bytes());
}

/// Encodes a float as s15Fixed16, truncating toward zero.
#[inline]
pub(crate) fn s15_fixed16(value: f64) -> i32 {
    (value * 65536.0) as i32
}

#[inline]
pub(crate) fn write_s15_fixed16_be(into: &mut Vec<u8>, value: f64) {
    write_u32_be(into, s15_fixed16(value) as u32);
}

/// Encodes a unit-scaled float as a profile sample, truncating and
/// clamping into the 16-bit range.
#[inline]
pub(crate) fn uint16_sample(value: f64) -> u16 {
    let value = (value * 65535.0) as i64;
    value.clamp(0, 65535) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_truncates_toward_zero() {
        assert_eq!(s15_fixed16(1.0), 0x10000);
        assert_eq!(s15_fixed16(0.9642), 0xF6D5);
        assert_eq!(s15_fixed16(0.8249), 0xD32C);
        assert_eq!(s15_fixed16(-0.5), -0x8000);
    }

    #[test]
    fn samples_clamp_to_u16() {
        assert_eq!(uint16_sample(0.0), 0);
        assert_eq!(uint16_sample(1.0), 65535);
        assert_eq!(uint16_sample(1.5), 65535);
        assert_eq!(uint16_sample(-0.25), 0);
        assert_eq!(uint16_sample(0.5), 32767);
    }
}
