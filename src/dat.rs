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
use crate::writer::write_u16_be;
use chrono::{Datelike, Timelike, Utc};

#[repr(C)]
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Default)]
pub struct ColorDateTime {
    pub year: u16,
    pub month: u16,
    pub day_of_the_month: u16,
    pub hours: u16,
    pub minutes: u16,
    pub seconds: u16,
}

impl ColorDateTime {
    /// Creation stamp written into every synthesized profile header.
    ///
    /// Synthesized profiles carry a constant date so identical inputs
    /// produce identical streams.
    pub(crate) const PROFILE_DATE: ColorDateTime = ColorDateTime {
        year: 2002,
        month: 1,
        day_of_the_month: 1,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a new `ColorDateTime` from the current system time (UTC)
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            year: now.year() as u16,
            month: now.month() as u16,
            day_of_the_month: now.day() as u16,
            hours: now.hour() as u16,
            minutes: now.minute() as u16,
            seconds: now.second() as u16,
        }
    }

    #[inline]
    pub(crate) fn encode(&self, into: &mut Vec<u8>) {
        write_u16_be(into, self.year);
        write_u16_be(into, self.month);
        write_u16_be(into, self.day_of_the_month);
        write_u16_be(into, self.hours);
        write_u16_be(into, self.minutes);
        write_u16_be(into, self.seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_date_encodes_to_twelve_bytes() {
        let mut buf = Vec::new();
        ColorDateTime::PROFILE_DATE.encode(&mut buf);
        assert_eq!(
            buf,
            [0x07, 0xD2, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }
}
