use binrw::{BinRead, BinWrite};

pub const WAV_HEADER_SIZE: usize = 44;
pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WAVE_TAG: [u8; 4] = *b"WAVE";
pub const FMT_TAG: [u8; 4] = *b"fmt ";
pub const DATA_TAG: [u8; 4] = *b"data";
pub const PCM_FORMAT: u16 = 1;

/// The canonical 44-byte header of a minimal PCM WAV file: a RIFF chunk holding one `fmt ` chunk
/// directly followed by the `data` chunk. No other chunks are expected in between.
#[derive(Debug, Clone, BinRead, BinWrite)]
#[brw(little)]
pub struct WavHeader {
    /// "RIFF"
    pub chunk_id: [u8; 4],

    /// File size minus 8 bytes
    pub chunk_size: u32,

    /// "WAVE"
    pub format: [u8; 4],

    /// Conventionally "fmt "
    pub subchunk1_id: [u8; 4],

    /// Size of the fmt chunk (16 for PCM)
    pub subchunk1_size: u32,

    /// Audio format, 1 is linear PCM
    pub audio_format: u16,

    pub num_channels: u16,

    pub sample_rate: u32,

    /// sample_rate * block_align
    pub byte_rate: u32,

    /// num_channels * bits_per_sample / 8
    pub block_align: u16,

    pub bits_per_sample: u16,

    /// Conventionally "data"
    pub subchunk2_id: [u8; 4],

    /// Length of the sample payload in bytes
    pub subchunk2_size: u32,
}

impl WavHeader {
    pub fn is_riff_wave(&self) -> bool {
        self.chunk_id == RIFF_TAG && self.format == WAVE_TAG
    }

    pub fn is_pcm(&self) -> bool {
        self.audio_format == PCM_FORMAT
    }

    pub fn data_size(&self) -> usize {
        self.subchunk2_size as usize
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    /// Builds a minimal WAV file. `declared_size` overrides the data chunk length field.
    pub(crate) fn build_wav(
        audio_format: u16,
        payload: &[u8],
        declared_size: Option<u32>,
    ) -> Vec<u8> {
        let data_size = declared_size.unwrap_or(payload.len() as u32);
        let header = WavHeader {
            chunk_id: RIFF_TAG,
            chunk_size: 36 + data_size,
            format: WAVE_TAG,
            subchunk1_id: FMT_TAG,
            subchunk1_size: 16,
            audio_format,
            num_channels: 2,
            sample_rate: 44100,
            byte_rate: 44100 * 4,
            block_align: 4,
            bits_per_sample: 16,
            subchunk2_id: DATA_TAG,
            subchunk2_size: data_size,
        };

        let mut buf = Vec::new();
        header.write(&mut Cursor::new(&mut buf)).unwrap();
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn test_header_layout() {
        let bytes = build_wav(PCM_FORMAT, &[], Some(0x0102_0304));
        assert_eq!(bytes.len(), WAV_HEADER_SIZE);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[20..22], &[0x01, 0x00]);
        assert_eq!(&bytes[24..28], &44100u32.to_le_bytes());
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(&bytes[40..44], &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_read_header() {
        let bytes = build_wav(PCM_FORMAT, &[0xAA; 8], None);
        let header = WavHeader::read(&mut Cursor::new(&bytes)).unwrap();

        assert!(header.is_riff_wave());
        assert!(header.is_pcm());
        assert_eq!(header.num_channels, 2);
        assert_eq!(header.sample_rate, 44100);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.data_size(), 8);
    }

    #[test]
    fn test_non_pcm_header() {
        // 3 = IEEE float
        let bytes = build_wav(3, &[], None);
        let header = WavHeader::read(&mut Cursor::new(&bytes)).unwrap();
        assert!(header.is_riff_wave());
        assert!(!header.is_pcm());
    }

    #[test]
    fn test_non_riff_header() {
        let mut bytes = build_wav(PCM_FORMAT, &[], None);
        bytes[0..4].copy_from_slice(b"RIFX");
        let header = WavHeader::read(&mut Cursor::new(&bytes)).unwrap();
        assert!(!header.is_riff_wave());

        let mut bytes = build_wav(PCM_FORMAT, &[], None);
        bytes[8..12].copy_from_slice(b"AVI ");
        let header = WavHeader::read(&mut Cursor::new(&bytes)).unwrap();
        assert!(!header.is_riff_wave());
    }
}
