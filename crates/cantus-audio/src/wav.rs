//! RIFF/WAVE container output.
//!
//! Writes canonical little-endian 16-bit PCM WAV files with no metadata
//! chunks, so identical sample data yields identical bytes. Stereo
//! accumulators are clipped to the 16-bit range here, not earlier; clipping
//! is hard saturation, never an error.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::buffer::{MonoBuffer, StereoBuffer, SAMPLE_RATE};
use crate::error::{AudioError, AudioResult};

/// Bits per sample. Fixed by the output contract.
pub const BITS_PER_SAMPLE: u16 = 16;

/// WAV format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// The mono output format.
    pub fn mono() -> Self {
        Self {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// The stereo output format.
    pub fn stereo() -> Self {
        Self {
            channels: 2,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align: bytes per sample frame.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate: bytes per second.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file (header plus PCM payload) to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm: &[u8]) -> io::Result<()> {
    let data_size = pcm.len() as u32;
    let file_size = 36 + data_size; // total minus the 8-byte RIFF preamble

    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size for PCM
    writer.write_all(&1u16.to_le_bytes())?; // format tag 1 = PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm.len());
    write_wav(&mut buffer, format, pcm).expect("writing to Vec should not fail");
    buffer
}

/// Interleaves and clips the populated range of a stereo buffer to 16-bit
/// PCM bytes.
pub fn interleave(buf: &StereoBuffer) -> AudioResult<Vec<u8>> {
    let used = buf.frames_used();
    let mut pcm = Vec::new();
    pcm.try_reserve_exact(used * 4)
        .map_err(|_| AudioError::OutOfMemory {
            what: "interleave buffer",
            bytes: used * 4,
        })?;

    let left = buf.left();
    let right = buf.right();
    for i in 0..used {
        let l = left[i].clamp(-32_768, 32_767) as i16;
        let r = right[i].clamp(-32_768, 32_767) as i16;
        pcm.extend_from_slice(&l.to_le_bytes());
        pcm.extend_from_slice(&r.to_le_bytes());
    }

    Ok(pcm)
}

/// The populated range of a mono buffer as 16-bit PCM bytes.
pub fn mono_pcm(buf: &MonoBuffer) -> AudioResult<Vec<u8>> {
    let used = buf.frames_used();
    let mut pcm = Vec::new();
    pcm.try_reserve_exact(used * 2)
        .map_err(|_| AudioError::OutOfMemory {
            what: "pcm buffer",
            bytes: used * 2,
        })?;

    for &sample in &buf.samples()[..used] {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }

    Ok(pcm)
}

fn write_file(path: &Path, format: &WavFormat, pcm: &[u8]) -> AudioResult<()> {
    let file = File::create(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let result = write_wav(&mut writer, format, pcm).and_then(|_| writer.flush());
    if let Err(source) = result {
        drop(writer);
        let _ = fs::remove_file(path);
        return Err(AudioError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Serializes the populated range of a stereo buffer to `path`.
pub fn write_stereo_file(path: impl AsRef<Path>, buf: &StereoBuffer) -> AudioResult<()> {
    let pcm = interleave(buf)?;
    write_file(path.as_ref(), &WavFormat::stereo(), &pcm)
}

/// Serializes the populated range of a mono buffer to `path`.
pub fn write_mono_file(path: impl AsRef<Path>, buf: &MonoBuffer) -> AudioResult<()> {
    let pcm = mono_pcm(buf)?;
    write_file(path.as_ref(), &WavFormat::mono(), &pcm)
}

/// Extracts the PCM payload from a WAV file buffer.
///
/// Walks the chunk list rather than assuming a 44-byte header, so files with
/// extra chunks still parse. Returns `None` if the container is malformed.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
            return None;
        }

        pos += 8 + chunk_size;
        // Chunks are word-aligned.
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// BLAKE3 hash of raw PCM bytes, hex-encoded. Used to verify that renders
/// are byte-identical across runs.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
