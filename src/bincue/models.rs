use crate::cd::Msf;

/// A track packed into the BIN image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: String,

    /// Start of the track's audio in the image, in CD frames (one sector per frame)
    pub offset_frames: u32,
}

impl TrackInfo {
    pub fn start(&self) -> Msf {
        Msf::from_frames(self.offset_frames)
    }
}
