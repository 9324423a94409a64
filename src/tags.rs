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
use crate::cie::{CieSpace, DecodeFn, ValueRange};
use crate::dat::ColorDateTime;
use crate::err::SynthError;
use crate::lab::adapt_white_point;
use crate::matrix::{Matrix3d, WHITE_POINT_D50, Xyzd};
use crate::profile::{DataColorSpace, RenderingIntent};
use crate::sink::ProfileSink;
use crate::writer::{uint16_sample, write_s15_fixed16_be, write_u16_be, write_u32_be};
use pxfm::f_pow;

const ACSP_SIGNATURE: u32 = u32::from_ne_bytes(*b"acsp").to_be();
const SCANNER_CLASS: u32 = u32::from_ne_bytes(*b"scnr").to_be();
const DESC_TAG: u32 = u32::from_ne_bytes(*b"desc").to_be();
const WT_PT_TAG: u32 = u32::from_ne_bytes(*b"wtpt").to_be();
const CPRT_TAG: u32 = u32::from_ne_bytes(*b"cprt").to_be();
const ATOB0_TAG: u32 = u32::from_ne_bytes(*b"A2B0").to_be();
pub(crate) const R_TAG_TRC: u32 = u32::from_ne_bytes(*b"rTRC").to_be();
pub(crate) const G_TAG_TRC: u32 = u32::from_ne_bytes(*b"gTRC").to_be();
pub(crate) const B_TAG_TRC: u32 = u32::from_ne_bytes(*b"bTRC").to_be();
pub(crate) const R_TAG_XYZ: u32 = u32::from_ne_bytes(*b"rXYZ").to_be();
pub(crate) const G_TAG_XYZ: u32 = u32::from_ne_bytes(*b"gXYZ").to_be();
pub(crate) const B_TAG_XYZ: u32 = u32::from_ne_bytes(*b"bXYZ").to_be();
const MARK_TRC_CURV: u32 = u32::from_ne_bytes(*b"curv").to_be();
const MARK_TEXT: u32 = u32::from_ne_bytes(*b"text").to_be();
const MARK_XYZ: u32 = u32::from_ne_bytes(*b"XYZ ").to_be();
const MARK_MFT2: u32 = u32::from_ne_bytes(*b"mft2").to_be();

const PROFILE_HEADER_SIZE: usize = 128;
const TAG_SIZE: usize = 12;
const PROFILE_VERSION_2_2: u32 = 0x0220_0000;
const EMBEDDED_USE_FLAGS: u32 = 0x0000_0003;

const DESC_TAG_SIZE: usize = 96;
const XYZ_TAG_SIZE: usize = 20;
const CPRT_TAG_SIZE: usize = 13;
const LUT_HEAD_SIZE: usize = 52;
/// Identity ramp entries in the mft2 input and output tables.
const LUT_RAMP_ENTRIES: u16 = 2;
const TRC_SAMPLE_COUNT: usize = 512;
/// Upper bound on total lattice nodes, enough for a 7^4 grid.
const MAX_CLUT_ENTRIES: f64 = 2500.;
/// A2B0 samples cover [0, MAX_ICC_XYZ_VALUE] rather than [0, 1], so
/// XYZ 1.0 encodes as 0x8000.
const MAX_ICC_XYZ_VALUE: f64 = 1.0 + 32767.0 / 32768.0;

/// One profile tag: directory entry plus its payload.
///
/// Literal payloads are held in `head` outright. Sampled payloads keep
/// only the fixed type prefix there and generate the rest while the
/// profile streams out, so no full lattice is ever buffered.
pub(crate) struct TagRecord<'a> {
    pub(crate) sig: u32,
    /// Declared payload length. Directory offsets advance by this
    /// rounded up to a four byte boundary.
    pub(crate) len: u32,
    pub(crate) head: Vec<u8>,
    pub(crate) body: TagBody<'a>,
}

pub(crate) enum TagBody<'a> {
    /// Payload is `head` in full.
    Literal,
    /// 512 samples of one decode function over its declared range.
    ToneCurve {
        curve: &'a DecodeFn,
        range: ValueRange,
    },
    /// Dense lattice sampled from the source space.
    Clut { space: &'a CieSpace, grid_points: u8 },
}

/// Fixed textDescription tag; readers require one but nothing consumes
/// its contents.
pub(crate) fn desc_tag() -> TagRecord<'static> {
    const DESCRIPTION: &[u8] = b"adhoc\0";
    let mut head = Vec::with_capacity(DESC_TAG_SIZE);
    write_u32_be(&mut head, DESC_TAG);
    write_u32_be(&mut head, 0);
    write_u32_be(&mut head, DESCRIPTION.len() as u32);
    head.extend_from_slice(DESCRIPTION);
    // Unicode and scriptcode parts stay zero.
    head.resize(DESC_TAG_SIZE, 0);
    TagRecord {
        sig: DESC_TAG,
        len: DESC_TAG_SIZE as u32,
        head,
        body: TagBody::Literal,
    }
}

pub(crate) fn xyz_tag(sig: u32, value: Xyzd) -> TagRecord<'static> {
    let mut head = Vec::with_capacity(XYZ_TAG_SIZE);
    write_u32_be(&mut head, MARK_XYZ);
    write_u32_be(&mut head, 0);
    write_s15_fixed16_be(&mut head, value.x);
    write_s15_fixed16_be(&mut head, value.y);
    write_s15_fixed16_be(&mut head, value.z);
    TagRecord {
        sig,
        len: XYZ_TAG_SIZE as u32,
        head,
        body: TagBody::Literal,
    }
}

/// Media white point. Always D50, whatever the source space declared;
/// source deviation is folded into the payloads instead.
pub(crate) fn white_point_tag() -> TagRecord<'static> {
    xyz_tag(WT_PT_TAG, WHITE_POINT_D50)
}

/// Placeholder copyright tag, required by strict profile validators.
pub(crate) fn copyright_tag() -> TagRecord<'static> {
    let mut head = Vec::with_capacity(CPRT_TAG_SIZE);
    write_u32_be(&mut head, MARK_TEXT);
    write_u32_be(&mut head, 0);
    head.extend_from_slice(b"none\0");
    TagRecord {
        sig: CPRT_TAG,
        len: CPRT_TAG_SIZE as u32,
        head,
        body: TagBody::Literal,
    }
}

pub(crate) fn tone_curve_tag(sig: u32, curve: &DecodeFn, range: ValueRange) -> TagRecord<'_> {
    let mut head = Vec::with_capacity(TAG_SIZE);
    write_u32_be(&mut head, MARK_TRC_CURV);
    write_u32_be(&mut head, 0);
    write_u32_be(&mut head, TRC_SAMPLE_COUNT as u32);
    TagRecord {
        sig,
        len: (TAG_SIZE + TRC_SAMPLE_COUNT * 2) as u32,
        head,
        body: TagBody::ToneCurve { curve, range },
    }
}

/// Lattice points per axis for a sampled LUT, capped to what one byte
/// can declare.
fn clut_grid_points(channels: usize) -> u8 {
    let points = f_pow(MAX_CLUT_ENTRIES, 1.0 / channels as f64).floor() as i32;
    points.min(255) as u8
}

/// A2B0 tag in the mft2 layout: identity matrix, degenerate two entry
/// input and output ramps, and a lattice of PCSXYZ samples.
pub(crate) fn lut_tag(space: &CieSpace) -> TagRecord<'_> {
    let channels = space.channels();
    let grid_points = clut_grid_points(channels);
    let node_count = (grid_points as u32).pow(channels as u32);
    let mut head = Vec::with_capacity(LUT_HEAD_SIZE);
    write_u32_be(&mut head, MARK_MFT2);
    write_u32_be(&mut head, 0);
    head.push(channels as u8);
    head.push(3);
    head.push(grid_points);
    head.push(0);
    for row in Matrix3d::IDENTITY.v {
        for value in row {
            write_s15_fixed16_be(&mut head, value);
        }
    }
    write_u16_be(&mut head, LUT_RAMP_ENTRIES);
    write_u16_be(&mut head, LUT_RAMP_ENTRIES);
    let ramp = 2 * LUT_RAMP_ENTRIES as u32;
    TagRecord {
        sig: ATOB0_TAG,
        len: LUT_HEAD_SIZE as u32 + channels as u32 * ramp + node_count * 6 + 3 * ramp,
        head,
        body: TagBody::Clut { space, grid_points },
    }
}

/// Directory offsets for a tag plan and the resulting profile size.
fn layout(tags: &[TagRecord<'_>]) -> (Vec<u32>, u32) {
    let mut offsets = Vec::with_capacity(tags.len());
    let mut offset = (PROFILE_HEADER_SIZE + 4 + TAG_SIZE * tags.len()) as u32;
    for tag in tags {
        offsets.push(offset);
        offset += tag.len.next_multiple_of(4);
    }
    (offsets, offset)
}

fn encode_header(profile_size: u32, data_space: DataColorSpace) -> Vec<u8> {
    let mut header = Vec::with_capacity(PROFILE_HEADER_SIZE);
    write_u32_be(&mut header, profile_size);
    write_u32_be(&mut header, 0); // CMM type
    write_u32_be(&mut header, PROFILE_VERSION_2_2);
    write_u32_be(&mut header, SCANNER_CLASS);
    write_u32_be(&mut header, data_space.signature());
    write_u32_be(&mut header, DataColorSpace::Xyz.signature()); // PCS
    ColorDateTime::PROFILE_DATE.encode(&mut header);
    write_u32_be(&mut header, ACSP_SIGNATURE);
    write_u32_be(&mut header, 0); // platform
    write_u32_be(&mut header, EMBEDDED_USE_FLAGS);
    write_u32_be(&mut header, 0); // manufacturer
    write_u32_be(&mut header, 0); // model
    write_u32_be(&mut header, 0); // attributes, eight bytes
    write_u32_be(&mut header, 0);
    write_u32_be(&mut header, RenderingIntent::Saturation as u32);
    // Illuminant repeats the media white point.
    write_s15_fixed16_be(&mut header, WHITE_POINT_D50.x);
    write_s15_fixed16_be(&mut header, WHITE_POINT_D50.y);
    write_s15_fixed16_be(&mut header, WHITE_POINT_D50.z);
    write_u32_be(&mut header, 0); // creator
    header.resize(PROFILE_HEADER_SIZE, 0);
    header
}

/// Serializes a complete version 2 profile: header, tag directory, then
/// each payload zero padded to a four byte boundary.
pub(crate) fn write_profile<S: ProfileSink>(
    sink: &mut S,
    data_space: DataColorSpace,
    tags: &[TagRecord<'_>],
) -> Result<(), SynthError> {
    let (offsets, profile_size) = layout(tags);
    sink.append(&encode_header(profile_size, data_space))?;

    let mut directory = Vec::with_capacity(4 + TAG_SIZE * tags.len());
    write_u32_be(&mut directory, tags.len() as u32);
    for (tag, &offset) in tags.iter().zip(&offsets) {
        write_u32_be(&mut directory, tag.sig);
        write_u32_be(&mut directory, offset);
        write_u32_be(&mut directory, tag.len);
    }
    sink.append(&directory)?;

    for tag in tags {
        debug_assert!(tag.head.len() <= tag.len as usize);
        sink.append(&tag.head)?;
        match &tag.body {
            TagBody::Literal => {}
            TagBody::ToneCurve { curve, range } => {
                let mut samples = Vec::with_capacity(TRC_SAMPLE_COUNT * 2);
                for i in 0..TRC_SAMPLE_COUNT {
                    let sample = curve(range.arg(i, TRC_SAMPLE_COUNT));
                    write_u16_be(&mut samples, uint16_sample(sample));
                }
                sink.append(&samples)?;
            }
            TagBody::Clut { space, grid_points } => {
                write_clut_body(sink, space, *grid_points)?;
            }
        }
        let padding = tag.len.next_multiple_of(4) - tag.len;
        sink.append(&[0u8; 3][..padding as usize])?;
    }
    Ok(())
}

fn write_clut_body<S: ProfileSink>(
    sink: &mut S,
    space: &CieSpace,
    grid_points: u8,
) -> Result<(), SynthError> {
    let channels = space.channels();
    let ranges = space.input_ranges();
    let white = space.white_point();
    let stride = grid_points as usize;

    const RAMP: [u8; 4] = [0, 0, 255, 255];
    let mut input_tables = Vec::with_capacity(channels * RAMP.len());
    for _ in 0..channels {
        input_tables.extend_from_slice(&RAMP);
    }
    sink.append(&input_tables)?;

    let node_count = stride.pow(channels as u32);
    let mut input = [0f64; 4];
    let mut entry = Vec::with_capacity(6);
    for node in 0..node_count {
        // Last channel varies fastest across the lattice.
        let mut n = node;
        for ch in (0..channels).rev() {
            input[ch] = ranges[ch].arg(n % stride, stride);
            n /= stride;
        }
        let xyz = adapt_white_point(space.concretize(&input[..channels])?, white, WHITE_POINT_D50);
        entry.clear();
        write_u16_be(&mut entry, uint16_sample(xyz.x / MAX_ICC_XYZ_VALUE));
        write_u16_be(&mut entry, uint16_sample(xyz.y / MAX_ICC_XYZ_VALUE));
        write_u16_be(&mut entry, uint16_sample(xyz.z / MAX_ICC_XYZ_VALUE));
        sink.append(&entry)?;
    }

    sink.append(&[0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255, 255])
}
