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
use crate::profile::DataColorSpace;
use crate::sink::{ProfileSink, ProfileStreamHost, StreamId};
use crate::synth::{CompatibilityLevel, DeviceColorSpace};
use tracing::{debug, warn};

/// Raw version bytes from an embedded profile's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IccVersion {
    pub major: u8,
    pub minor: u8,
}

impl IccVersion {
    pub const fn new(major: u8, minor: u8) -> IccVersion {
        IccVersion { major, minor }
    }

    /// Displayed minor version; the raw byte carries it in the high
    /// nibble.
    pub const fn minor_version(self) -> u8 {
        self.minor >> 4
    }
}

/// A ready-made profile arriving with an incoming color space,
/// described by whatever loaded it.
pub struct EmbeddedProfile<'a> {
    pub data: &'a [u8],
    pub data_color_space: DataColorSpace,
    pub components: usize,
    /// Whether the source space names an alternate to fall back to.
    pub has_alternate: bool,
    pub version: IccVersion,
}

/// Color management service of the surrounding rendering context.
pub trait ColorManagement {
    /// Produces a version 2 rendition of the profile.
    fn downgrade_to_v2(&self, profile: &EmbeddedProfile<'_>) -> Result<Vec<u8>, SynthError>;
}

/// Finished pass-through stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedIccSpace {
    pub id: StreamId,
    pub components: usize,
}

/// Streams an already built profile into the document, downgrading it
/// first when it declares a version newer than the compatibility level
/// tolerates.
///
/// A `RangeCheck` result means the caller should fall back to a plain
/// device space for this object; the rest of the document is unaffected.
pub fn embed_icc_profile<H: ProfileStreamHost>(
    host: &mut H,
    profile: &EmbeddedProfile<'_>,
    level: CompatibilityLevel,
    cms: Option<&dyn ColorManagement>,
) -> Result<EmbeddedIccSpace, SynthError> {
    if !profile.data_color_space.is_embeddable() {
        warn!(
            space = ?profile.data_color_space,
            "profile is not suitable for embedding, its colors will be converted to device space"
        );
        return Err(SynthError::RangeCheck);
    }
    // Without an alternate, only counts with an implied device space
    // can be declared.
    if !profile.has_alternate && DeviceColorSpace::for_components(profile.components).is_none() {
        return Err(SynthError::RangeCheck);
    }
    if level < CompatibilityLevel::Pdf1_3 {
        return Err(SynthError::RangeCheck);
    }

    let major = profile.version.major;
    let minor = profile.version.minor_version();
    let downgrade = if level < CompatibilityLevel::Pdf1_5 {
        major > 2
    } else if level == CompatibilityLevel::Pdf1_5 {
        major > 4 || minor > 0
    } else if level == CompatibilityLevel::Pdf1_6 {
        major > 4 || minor > 1
    } else {
        major > 4 || minor > 2
    };

    let downgraded;
    let bytes: &[u8] = if downgrade {
        let Some(cms) = cms else {
            return Err(SynthError::Undefined);
        };
        debug!(major, minor, ?level, "downgrading embedded profile to version 2");
        downgraded = cms.downgrade_to_v2(profile)?;
        &downgraded
    } else {
        profile.data
    };

    let mut stream = host.allocate()?;
    match stream.append(bytes) {
        Ok(()) => {
            let id = host.finish(stream)?;
            host.register(id)?;
            Ok(EmbeddedIccSpace {
                id,
                components: profile.components,
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
    use crate::sink::MemoryStreamHost;

    const RAW: &[u8] = b"embedded profile bytes";
    const V2: &[u8] = b"downgraded rendition";

    struct StubCms;

    impl ColorManagement for StubCms {
        fn downgrade_to_v2(&self, _: &EmbeddedProfile<'_>) -> Result<Vec<u8>, SynthError> {
            Ok(V2.to_vec())
        }
    }

    fn rgb_profile(version: IccVersion) -> EmbeddedProfile<'static> {
        EmbeddedProfile {
            data: RAW,
            data_color_space: DataColorSpace::Rgb,
            components: 3,
            has_alternate: false,
            version,
        }
    }

    #[test]
    fn tolerated_versions_embed_verbatim() {
        let mut host = MemoryStreamHost::new();
        let profile = rgb_profile(IccVersion::new(4, 0x20));
        let space =
            embed_icc_profile(&mut host, &profile, CompatibilityLevel::Pdf1_7, None).unwrap();
        assert_eq!(space.components, 3);
        assert_eq!(host.stream(space.id).unwrap(), RAW);
        assert_eq!(host.registered, vec![space.id]);
    }

    #[test]
    fn newer_versions_are_downgraded() {
        let mut host = MemoryStreamHost::new();
        let profile = rgb_profile(IccVersion::new(4, 0x20));
        let space = embed_icc_profile(
            &mut host,
            &profile,
            CompatibilityLevel::Pdf1_5,
            Some(&StubCms),
        )
        .unwrap();
        assert_eq!(host.stream(space.id).unwrap(), V2);
    }

    #[test]
    fn downgrade_without_a_context_is_undefined() {
        let mut host = MemoryStreamHost::new();
        let profile = rgb_profile(IccVersion::new(4, 0x20));
        let err =
            embed_icc_profile(&mut host, &profile, CompatibilityLevel::Pdf1_5, None).unwrap_err();
        assert_eq!(err, SynthError::Undefined);
        assert!(host.streams.is_empty());
    }

    #[test]
    fn version_ladder_follows_the_level() {
        let cases = [
            (IccVersion::new(2, 0x40), CompatibilityLevel::Pdf1_3, false),
            (IccVersion::new(3, 0x00), CompatibilityLevel::Pdf1_4, true),
            (IccVersion::new(4, 0x00), CompatibilityLevel::Pdf1_5, false),
            (IccVersion::new(4, 0x10), CompatibilityLevel::Pdf1_5, true),
            (IccVersion::new(4, 0x10), CompatibilityLevel::Pdf1_6, false),
            (IccVersion::new(4, 0x30), CompatibilityLevel::Pdf1_7, true),
            (IccVersion::new(5, 0x00), CompatibilityLevel::Pdf1_7, true),
        ];
        for (version, level, downgraded) in cases {
            let mut host = MemoryStreamHost::new();
            let profile = rgb_profile(version);
            let space = embed_icc_profile(&mut host, &profile, level, Some(&StubCms)).unwrap();
            let expected: &[u8] = if downgraded { V2 } else { RAW };
            assert_eq!(
                host.stream(space.id).unwrap(),
                expected,
                "{version:?} at {level:?}"
            );
        }
    }

    #[test]
    fn disallowed_spaces_are_rejected() {
        let mut host = MemoryStreamHost::new();
        let mut profile = rgb_profile(IccVersion::new(2, 0));
        profile.data_color_space = DataColorSpace::Hsv;
        let err =
            embed_icc_profile(&mut host, &profile, CompatibilityLevel::Pdf1_7, None).unwrap_err();
        assert_eq!(err, SynthError::RangeCheck);
        assert!(host.streams.is_empty());
    }

    #[test]
    fn odd_component_counts_need_an_alternate() {
        let mut host = MemoryStreamHost::new();
        let mut profile = rgb_profile(IccVersion::new(2, 0));
        profile.data_color_space = DataColorSpace::Lab;
        profile.components = 2;
        let err =
            embed_icc_profile(&mut host, &profile, CompatibilityLevel::Pdf1_7, None).unwrap_err();
        assert_eq!(err, SynthError::RangeCheck);

        profile.has_alternate = true;
        embed_icc_profile(&mut host, &profile, CompatibilityLevel::Pdf1_7, None).unwrap();
    }

    #[test]
    fn early_documents_reject_profile_streams() {
        let mut host = MemoryStreamHost::new();
        let profile = rgb_profile(IccVersion::new(2, 0));
        let err =
            embed_icc_profile(&mut host, &profile, CompatibilityLevel::Pdf1_2, None).unwrap_err();
        assert_eq!(err, SynthError::RangeCheck);
    }
}
