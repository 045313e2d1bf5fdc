//! WAV file writer for rendered sounds.
//!
//! Writes mono 16-bit integer PCM using the hound crate. Samples are
//! streamed straight into the writer, so a tone is never buffered whole
//! on its way to disk.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Result, SfxError};

/// Output sample rate (44.1kHz).
pub const SAMPLE_RATE: u32 = 44100;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per PCM sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Container format shared by every rendered sound.
pub fn wav_spec() -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes 16-bit samples to a WAV file, replacing any existing file.
///
/// The file handle is released on every path; if writing fails partway,
/// hound's drop finalizes whatever was written and the partial file stays.
pub fn write_wav<I>(samples: I, path: &Path) -> Result<()>
where
    I: IntoIterator<Item = i16>,
{
    let mut writer =
        WavWriter::create(path, wav_spec()).map_err(|e| storage_error(path, e))?;

    for sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| storage_error(path, e))?;
    }

    writer.finalize().map_err(|e| storage_error(path, e))?;

    Ok(())
}

/// Writes 16-bit samples to an in-memory WAV buffer.
///
/// Returns the WAV file contents as a byte vector.
pub fn write_wav_to_buffer<I>(samples: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = i16>,
{
    let target = Path::new("<memory>");
    let mut buffer = Vec::new();

    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let mut writer =
            WavWriter::new(cursor, wav_spec()).map_err(|e| storage_error(target, e))?;

        for sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| storage_error(target, e))?;
        }

        writer.finalize().map_err(|e| storage_error(target, e))?;
    }

    Ok(buffer)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}

/// Surfaces I/O failures as the plain `io::Error` hound wrapped.
fn storage_error(path: &Path, err: hound::Error) -> SfxError {
    match err {
        hound::Error::IoError(io_err) => SfxError::storage(path, io_err),
        other => SfxError::storage(path, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::error::Error;
    use tempfile::tempdir;

    #[test]
    fn write_wav_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0i16, 16383, -16383, 0];
        write_wav(samples.clone(), &path).unwrap();

        assert!(path.exists());

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);

        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn header_declares_mono_pcm() {
        let buffer = write_wav_to_buffer([1i16, -1]).unwrap();

        assert_eq!(&buffer[0..4], b"RIFF");
        assert_eq!(&buffer[8..12], b"WAVE");
        assert_eq!(&buffer[12..16], b"fmt ");

        let u16_at = |o: usize| u16::from_le_bytes([buffer[o], buffer[o + 1]]);
        let u32_at =
            |o: usize| u32::from_le_bytes([buffer[o], buffer[o + 1], buffer[o + 2], buffer[o + 3]]);

        assert_eq!(u16_at(20), 1); // PCM
        assert_eq!(u16_at(22), 1); // channels
        assert_eq!(u32_at(24), 44100);
        assert_eq!(u32_at(28), 88200); // byte rate
        assert_eq!(u16_at(32), 2); // block align
        assert_eq!(u16_at(34), 16);

        // Samples are little-endian at the end of the data chunk.
        let data = &buffer[buffer.len() - 4..];
        assert_eq!(data, &[0x01, 0x00, 0xff, 0xff]);
    }

    #[test]
    fn write_wav_reports_storage_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.wav");

        let err = write_wav([0i16], &path).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageFailed);

        let io_err = err
            .source()
            .and_then(|s| s.downcast_ref::<std::io::Error>())
            .unwrap();
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, SAMPLE_RATE), 1.0);
        assert_eq!(samples_to_duration(22050, SAMPLE_RATE), 0.5);
    }
}
