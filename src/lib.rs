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
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
mod cie;
mod ctable;
mod dat;
mod embed;
mod err;
mod lab;
mod matrix;
mod profile;
mod sink;
mod synth;
mod tags;
mod writer;

pub use cie::{CieA, CieAbc, CieDef, CieDefg, CieSpace, DecodeFn, ValueRange};
pub use ctable::ColorTable;
pub use dat::ColorDateTime;
pub use embed::{ColorManagement, EmbeddedIccSpace, EmbeddedProfile, IccVersion, embed_icc_profile};
pub use err::SynthError;
pub use lab::{Lab, adapt_white_point, lab_range};
pub use matrix::{Matrix3d, Vector3, Vector3d, Vector4, Vector4f, WHITE_POINT_D50, Xyzd};
pub use profile::{DataColorSpace, RenderingIntent};
pub use sink::{MemoryStreamHost, ProfileSink, ProfileStreamHost, StreamId};
pub use synth::{CompatibilityLevel, DeviceColorSpace, SynthesizedColorSpace, write_cie_color_space};
