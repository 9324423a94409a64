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

/// Byte sink for one profile stream.
pub trait ProfileSink {
    fn append(&mut self, bytes: &[u8]) -> Result<(), SynthError>;
}

impl ProfileSink for Vec<u8> {
    fn append(&mut self, bytes: &[u8]) -> Result<(), SynthError> {
        self.try_reserve(bytes.len())
            .map_err(|_| SynthError::OutOfMemory)?;
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Identity of a finished stream inside the surrounding document.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct StreamId(pub u64);

/// Object-graph contract of the embedding document writer.
///
/// Profile streams are allocated here, filled through [`ProfileSink`],
/// then either finished, which assigns their persistent identity, or
/// discarded. Registration ties a finished stream's lifetime to
/// document finalization.
pub trait ProfileStreamHost {
    type Stream: ProfileSink;

    fn allocate(&mut self) -> Result<Self::Stream, SynthError>;
    fn finish(&mut self, stream: Self::Stream) -> Result<StreamId, SynthError>;
    fn discard(&mut self, stream: Self::Stream);
    fn register(&mut self, id: StreamId) -> Result<(), SynthError>;
}

/// Host keeping every finished stream in memory, for callers without a
/// document writer and for inspection in tests.
#[derive(Debug, Default)]
pub struct MemoryStreamHost {
    pub streams: Vec<Vec<u8>>,
    pub registered: Vec<StreamId>,
}

impl MemoryStreamHost {
    pub fn new() -> MemoryStreamHost {
        MemoryStreamHost::default()
    }

    /// Bytes of a finished stream.
    pub fn stream(&self, id: StreamId) -> Option<&[u8]> {
        self.streams.get(id.0 as usize).map(|s| s.as_slice())
    }
}

impl ProfileStreamHost for MemoryStreamHost {
    type Stream = Vec<u8>;

    fn allocate(&mut self) -> Result<Vec<u8>, SynthError> {
        Ok(Vec::new())
    }

    fn finish(&mut self, stream: Vec<u8>) -> Result<StreamId, SynthError> {
        let id = StreamId(self.streams.len() as u64);
        self.streams.push(stream);
        Ok(id)
    }

    fn discard(&mut self, _stream: Vec<u8>) {}

    fn register(&mut self, id: StreamId) -> Result<(), SynthError> {
        self.registered.push(id);
        Ok(())
    }
}
