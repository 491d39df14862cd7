use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SECTOR_SIZE: usize = 2352;
pub const FRAMES_PER_SECOND: u32 = 75;
pub const SECONDS_PER_MINUTE: u32 = 60;
pub const FRAMES_PER_MINUTE: u32 = FRAMES_PER_SECOND * SECONDS_PER_MINUTE;

/// Rounds a byte length up to the next whole sector.
pub fn sector_align(len: usize) -> usize {
    len.div_ceil(SECTOR_SIZE) * SECTOR_SIZE
}

/// Number of sectors (CD frames) needed to hold `len` bytes.
pub fn sectors_for(len: usize) -> usize {
    len.div_ceil(SECTOR_SIZE)
}

/// A disc position in minutes, seconds and frames (1/75 s).
///
/// Minutes are not capped at 99, a long image simply renders more digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u8,
    pub frames: u8,
}

impl Msf {
    pub fn from_frames(frames: u32) -> Self {
        Self {
            minutes: frames / FRAMES_PER_MINUTE,
            seconds: ((frames / FRAMES_PER_SECOND) % SECONDS_PER_MINUTE) as u8,
            frames: (frames % FRAMES_PER_SECOND) as u8,
        }
    }

    pub fn to_frames(&self) -> u32 {
        self.minutes * FRAMES_PER_MINUTE
            + self.seconds as u32 * FRAMES_PER_SECOND
            + self.frames as u32
    }
}

impl fmt::Display for Msf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid MSF format: {0}")]
pub struct ParseMsfError(pub String);

impl FromStr for Msf {
    type Err = ParseMsfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMsfError(s.to_string());

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let minutes = parts[0].parse::<u32>().map_err(|_| invalid())?;
        let seconds = parts[1].parse::<u8>().map_err(|_| invalid())?;
        let frames = parts[2].parse::<u8>().map_err(|_| invalid())?;

        if seconds as u32 >= SECONDS_PER_MINUTE || frames as u32 >= FRAMES_PER_SECOND {
            return Err(invalid());
        }

        Ok(Self {
            minutes,
            seconds,
            frames,
        })
    }
}
