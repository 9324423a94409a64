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
use crate::lab::{adapt_white_point, lab_range};
use crate::matrix::{WHITE_POINT_D50, Xyzd};
use crate::profile::DataColorSpace;
use crate::sink::{ProfileStreamHost, StreamId};
use crate::tags::{
    B_TAG_TRC, B_TAG_XYZ, G_TAG_TRC, G_TAG_XYZ, R_TAG_TRC, R_TAG_XYZ, TagRecord, copyright_tag,
    desc_tag, lut_tag, tone_curve_tag, white_point_tag, write_profile, xyz_tag,
};
use tracing::debug;

/// Format floor of the document being produced. Ordered so that
/// capability checks read as plain comparisons.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum CompatibilityLevel {
    Pdf1_2,
    Pdf1_3,
    Pdf1_4,
    Pdf1_5,
    Pdf1_6,
    Pdf1_7,
}

/// Device space a reader falls back to when it cannot apply a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceColorSpace {
    Gray,
    Rgb,
    Cmyk,
}

impl DeviceColorSpace {
    pub const fn for_components(n: usize) -> Option<DeviceColorSpace> {
        match n {
            1 => Some(DeviceColorSpace::Gray),
            3 => Some(DeviceColorSpace::Rgb),
            4 => Some(DeviceColorSpace::Cmyk),
            _ => None,
        }
    }

    pub const fn components(self) -> usize {
        match self {
            DeviceColorSpace::Gray => 1,
            DeviceColorSpace::Rgb => 3,
            DeviceColorSpace::Cmyk => 4,
        }
    }

    /// Data space a synthesized profile declares in its header.
    pub(crate) const fn data_space(self) -> DataColorSpace {
        match self {
            DeviceColorSpace::Gray => DataColorSpace::Gray,
            DeviceColorSpace::Rgb => DataColorSpace::Rgb,
            DeviceColorSpace::Cmyk => DataColorSpace::Cmyk,
        }
    }
}

/// What the document writer should reference for a converted CIE space.
#[derive(Debug, PartialEq)]
pub enum SynthesizedColorSpace {
    /// Lab dictionary with synthesized a* and b* ranges. No profile
    /// stream is produced for these documents.
    Lab {
        range_a: ValueRange,
        range_b: ValueRange,
    },
    /// Finished profile stream plus the alternate implied by the
    /// component count.
    IccBased {
        id: StreamId,
        components: usize,
        alternate: DeviceColorSpace,
    },
}

/// Converts a CIE space into whatever the document's compatibility
/// level can carry: a Lab description for pre-1.3 documents, otherwise
/// a synthesized profile written into a fresh host stream.
///
/// Spaces reducible to one decode step and a matrix get the compact
/// tone curve and column form; everything else gets a sampled lattice.
/// Single channel spaces could use a gray tone curve but share the
/// lattice path instead.
pub fn write_cie_color_space<H: ProfileStreamHost>(
    host: &mut H,
    space: &CieSpace,
    level: CompatibilityLevel,
) -> Result<SynthesizedColorSpace, SynthError> {
    if level < CompatibilityLevel::Pdf1_3 {
        let (range_a, range_b) = lab_range(space)?;
        debug!(?level, "describing CIE space as Lab");
        return Ok(SynthesizedColorSpace::Lab { range_a, range_b });
    }

    let components = space.channels();
    let alternate = match DeviceColorSpace::for_components(components) {
        Some(alternate) => alternate,
        None => return Err(SynthError::RangeCheck),
    };

    let white = space.white_point();
    let mut tags: Vec<TagRecord> = vec![desc_tag(), white_point_tag(), copyright_tag()];
    if let Some((decode, matrix, ranges)) = space.tone_matrix() {
        tags.push(tone_curve_tag(R_TAG_TRC, &decode[0], ranges[0]));
        tags.push(tone_curve_tag(G_TAG_TRC, &decode[1], ranges[1]));
        tags.push(tone_curve_tag(B_TAG_TRC, &decode[2], ranges[2]));
        for (sig, j) in [(R_TAG_XYZ, 0), (G_TAG_XYZ, 1), (B_TAG_XYZ, 2)] {
            let column = Xyzd::from_vector(matrix.column(j));
            tags.push(xyz_tag(sig, adapt_white_point(column, white, WHITE_POINT_D50)));
        }
    } else {
        tags.push(lut_tag(space));
    }
    debug!(components, tags = tags.len(), "writing synthesized profile");

    let mut stream = host.allocate()?;
    match write_profile(&mut stream, alternate.data_space(), &tags) {
        Ok(()) => {
            let id = host.finish(stream)?;
            host.register(id)?;
            Ok(SynthesizedColorSpace::IccBased {
                id,
                components,
                alternate,
            })
        }
        Err(err) => {
            host.discard(stream);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cie::{CieA, CieAbc, CieDefg, DecodeFn};
    use crate::ctable::ColorTable;
    use crate::matrix::Matrix3d;
    use crate::sink::MemoryStreamHost;
    use crate::writer::s15_fixed16;

    fn identity() -> DecodeFn {
        Box::new(|v| v)
    }

    fn rgb_like(white: Xyzd, matrix: Option<Matrix3d>) -> CieSpace {
        CieSpace::Abc(CieAbc {
            decode: [identity(), identity(), identity()],
            ranges: [ValueRange::UNIT; 3],
            matrix,
            white_point: white,
        })
    }

    fn directory(profile: &[u8]) -> Vec<(u32, u32, u32)> {
        let count = u32::from_be_bytes(profile[128..132].try_into().unwrap()) as usize;
        (0..count)
            .map(|i| {
                let at = 132 + i * 12;
                let word =
                    |o: usize| u32::from_be_bytes(profile[at + o..at + o + 4].try_into().unwrap());
                (word(0), word(4), word(8))
            })
            .collect()
    }

    #[test]
    fn early_documents_describe_lab_instead() {
        let mut host = MemoryStreamHost::new();
        let space = rgb_like(WHITE_POINT_D50, Some(Matrix3d::IDENTITY));
        let result =
            write_cie_color_space(&mut host, &space, CompatibilityLevel::Pdf1_2).unwrap();
        let (range_a, range_b) = lab_range(&space).unwrap();
        assert_eq!(
            result,
            SynthesizedColorSpace::Lab { range_a, range_b }
        );
        assert!(host.streams.is_empty());
        assert!(host.registered.is_empty());
    }

    #[test]
    fn matrix_spaces_take_the_tone_curve_form() {
        let mut host = MemoryStreamHost::new();
        let space = rgb_like(WHITE_POINT_D50, Some(Matrix3d::IDENTITY));
        let result =
            write_cie_color_space(&mut host, &space, CompatibilityLevel::Pdf1_4).unwrap();
        let SynthesizedColorSpace::IccBased {
            id,
            components,
            alternate,
        } = result
        else {
            panic!("expected a profile stream");
        };
        assert_eq!(components, 3);
        assert_eq!(alternate, DeviceColorSpace::Rgb);
        assert_eq!(host.registered, vec![id]);

        let profile = host.stream(id).unwrap();
        let declared = u32::from_be_bytes(profile[0..4].try_into().unwrap());
        assert_eq!(profile.len(), declared as usize);
        assert_eq!(&profile[16..20], b"RGB ");
        let sigs: Vec<u32> = directory(profile).iter().map(|t| t.0).collect();
        let expect: Vec<u32> = [
            *b"desc", *b"wtpt", *b"cprt", *b"rTRC", *b"gTRC", *b"bTRC", *b"rXYZ", *b"gXYZ",
            *b"bXYZ",
        ]
        .iter()
        .map(|s| u32::from_be_bytes(*s))
        .collect();
        assert_eq!(sigs, expect);
    }

    #[test]
    fn single_channel_spaces_take_the_lattice_form() {
        let mut host = MemoryStreamHost::new();
        let space = CieSpace::A(CieA {
            decode: identity(),
            range: ValueRange::UNIT,
            white_point: WHITE_POINT_D50,
        });
        let result =
            write_cie_color_space(&mut host, &space, CompatibilityLevel::Pdf1_3).unwrap();
        let SynthesizedColorSpace::IccBased {
            id,
            components,
            alternate,
        } = result
        else {
            panic!("expected a profile stream");
        };
        assert_eq!(components, 1);
        assert_eq!(alternate, DeviceColorSpace::Gray);

        let profile = host.stream(id).unwrap();
        assert_eq!(&profile[16..20], b"GRAY");
        let tags = directory(profile);
        assert_eq!(tags.len(), 4);
        let (sig, _, len) = tags[3];
        assert_eq!(sig, u32::from_be_bytes(*b"A2B0"));
        // One axis of 255 nodes.
        assert_eq!(len, 52 + 4 + 255 * 6 + 12);
    }

    #[test]
    fn four_channel_spaces_take_the_lattice_form() {
        let mut host = MemoryStreamHost::new();
        let mut samples = Vec::new();
        for x in 0..2 {
            for y in 0..2 {
                for z in 0..2 {
                    for w in 0..2 {
                        samples.extend_from_slice(&[x as f32, y as f32, (z + w) as f32 * 0.5]);
                    }
                }
            }
        }
        let space = CieSpace::Defg(CieDefg {
            decode: [identity(), identity(), identity(), identity()],
            ranges: [ValueRange::UNIT; 4],
            table_ranges: [ValueRange::UNIT; 4],
            table: ColorTable::new_4d([2, 2, 2, 2], 3, samples).unwrap(),
            post_ranges: [ValueRange::UNIT; 3],
            white_point: WHITE_POINT_D50,
        });
        let result =
            write_cie_color_space(&mut host, &space, CompatibilityLevel::Pdf1_5).unwrap();
        let SynthesizedColorSpace::IccBased {
            id,
            components,
            alternate,
        } = result
        else {
            panic!("expected a profile stream");
        };
        assert_eq!(components, 4);
        assert_eq!(alternate, DeviceColorSpace::Cmyk);

        let profile = host.stream(id).unwrap();
        let declared = u32::from_be_bytes(profile[0..4].try_into().unwrap());
        assert_eq!(profile.len(), declared as usize);
        assert_eq!(&profile[16..20], b"CMYK");
        let tags = directory(profile);
        assert_eq!(tags.len(), 4);
        let (sig, _, len) = tags[3];
        assert_eq!(sig, u32::from_be_bytes(*b"A2B0"));
        // Four axes of 7 nodes each.
        assert_eq!(len, 52 + 16 + 7 * 7 * 7 * 7 * 6 + 12);
    }

    #[test]
    fn matrixless_spaces_fall_back_to_the_lattice() {
        let mut host = MemoryStreamHost::new();
        let space = rgb_like(WHITE_POINT_D50, None);
        write_cie_color_space(&mut host, &space, CompatibilityLevel::Pdf1_7).unwrap();
        let tags = directory(host.stream(StreamId(0)).unwrap());
        assert_eq!(tags.len(), 4);
        assert_eq!(tags[3].0, u32::from_be_bytes(*b"A2B0"));
    }

    #[test]
    fn white_point_tag_is_d50_for_any_source_white() {
        let mut host = MemoryStreamHost::new();
        let space = CieSpace::A(CieA {
            decode: identity(),
            range: ValueRange::UNIT,
            white_point: Xyzd::new(0.9505, 1.0, 1.089),
        });
        write_cie_color_space(&mut host, &space, CompatibilityLevel::Pdf1_3).unwrap();
        let profile = host.stream(StreamId(0)).unwrap();
        let (sig, offset, len) = directory(profile)[1];
        assert_eq!(sig, u32::from_be_bytes(*b"wtpt"));
        assert_eq!(len, 20);
        let at = offset as usize;
        assert_eq!(&profile[at..at + 8], b"XYZ \0\0\0\0");
        assert_eq!(
            &profile[at + 8..at + 20],
            &[0, 0, 0xF6, 0xD5, 0, 1, 0, 0, 0, 0, 0xD3, 0x2C]
        );
    }

    #[test]
    fn matrix_columns_are_adapted_to_d50() {
        let mut host = MemoryStreamHost::new();
        let white = Xyzd::new(0.9505, 1.0, 1.089);
        let matrix = Matrix3d {
            v: [[0.4124, 0.3576, 0.1805], [0.2126, 0.7152, 0.0722], [0.0193, 0.1192, 0.9505]],
        };
        let space = rgb_like(white, Some(matrix));
        write_cie_color_space(&mut host, &space, CompatibilityLevel::Pdf1_6).unwrap();
        let profile = host.stream(StreamId(0)).unwrap();
        let tags = directory(profile);
        let (sig, offset, _) = tags[6];
        assert_eq!(sig, u32::from_be_bytes(*b"rXYZ"));
        let at = offset as usize + 8;
        let word = |o: usize| u32::from_be_bytes(profile[o..o + 4].try_into().unwrap()) as i32;
        let column = Xyzd::from_vector(matrix.column(0));
        let adapted = adapt_white_point(column, white, WHITE_POINT_D50);
        assert_eq!(word(at), s15_fixed16(adapted.x));
        assert_eq!(word(at + 4), s15_fixed16(adapted.y));
        assert_eq!(word(at + 8), s15_fixed16(adapted.z));
    }

    #[test]
    fn device_space_component_mapping() {
        assert_eq!(DeviceColorSpace::for_components(1), Some(DeviceColorSpace::Gray));
        assert_eq!(DeviceColorSpace::for_components(3), Some(DeviceColorSpace::Rgb));
        assert_eq!(DeviceColorSpace::for_components(4), Some(DeviceColorSpace::Cmyk));
        assert_eq!(DeviceColorSpace::for_components(2), None);
        assert_eq!(DeviceColorSpace::Cmyk.components(), 4);
    }

    #[test]
    fn compatibility_levels_order() {
        assert!(CompatibilityLevel::Pdf1_2 < CompatibilityLevel::Pdf1_3);
        assert!(CompatibilityLevel::Pdf1_6 < CompatibilityLevel::Pdf1_7);
    }
}
