//! Audio: tone palette, sample loading and playback
//!
//! Samples are pre-rendered kalimba notes. They are read and validated once
//! at startup so a missing or corrupt file stops the program before the
//! first frame. Playback is fire-and-forget.

use std::io::Cursor;
use std::path::Path;

use crate::consts::TONE_COUNT;
use crate::error::{ArcsError, Result};
use crate::sim::SoundHandle;

/// Kalimba notes available to ringers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    KalimbaF3,
    KalimbaG3,
    KalimbaA3,
    KalimbaB3,
    KalimbaC4,
    KalimbaD3,
    KalimbaD4,
    KalimbaE3,
}

/// Palette order; ringer `i` plays `TONE_PALETTE[i % TONE_COUNT]`
pub const TONE_PALETTE: [Tone; TONE_COUNT] = [
    Tone::KalimbaF3,
    Tone::KalimbaG3,
    Tone::KalimbaA3,
    Tone::KalimbaB3,
    Tone::KalimbaC4,
    Tone::KalimbaD3,
    Tone::KalimbaD4,
    Tone::KalimbaE3,
];

impl Tone {
    pub fn for_index(index: usize) -> Self {
        TONE_PALETTE[index % TONE_COUNT]
    }

    pub fn from_handle(handle: SoundHandle) -> Self {
        Self::for_index(handle.slot())
    }

    /// Sample file name inside the sound directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Tone::KalimbaF3 => "kalimba_f3.wav",
            Tone::KalimbaG3 => "kalimba_g3.wav",
            Tone::KalimbaA3 => "kalimba_a3.wav",
            Tone::KalimbaB3 => "kalimba_b3.wav",
            Tone::KalimbaC4 => "kalimba_c4.wav",
            Tone::KalimbaD3 => "kalimba_d3.wav",
            Tone::KalimbaD4 => "kalimba_d4.wav",
            Tone::KalimbaE3 => "kalimba_e3.wav",
        }
    }

    pub fn note_name(&self) -> &'static str {
        match self {
            Tone::KalimbaF3 => "F3",
            Tone::KalimbaG3 => "G3",
            Tone::KalimbaA3 => "A3",
            Tone::KalimbaB3 => "B3",
            Tone::KalimbaC4 => "C4",
            Tone::KalimbaD3 => "D3",
            Tone::KalimbaD4 => "D4",
            Tone::KalimbaE3 => "E3",
        }
    }
}

/// One validated sample, kept as raw file bytes for the playback backend
#[derive(Debug, Clone)]
pub struct SoundClip {
    pub tone: Tone,
    pub sample_rate: u32,
    pub channels: u16,
    /// Frames per channel
    pub frames: u32,
    bytes: Vec<u8>,
}

impl SoundClip {
    /// Parse and fully decode `bytes`; `path` is only used for errors
    pub fn from_wav_bytes(tone: Tone, bytes: Vec<u8>, path: &Path) -> Result<Self> {
        let invalid = |source| ArcsError::InvalidWav {
            path: path.to_path_buf(),
            source,
        };

        let (spec, frames) = {
            let mut reader =
                hound::WavReader::new(Cursor::new(bytes.as_slice())).map_err(invalid)?;
            let spec = reader.spec();
            let frames = reader.duration();
            if frames == 0 {
                return Err(ArcsError::EmptySample {
                    path: path.to_path_buf(),
                });
            }

            // Walk every sample so truncated data fails here, not mid-loop
            match spec.sample_format {
                hound::SampleFormat::Int => {
                    for sample in reader.samples::<i32>() {
                        sample.map_err(invalid)?;
                    }
                }
                hound::SampleFormat::Float => {
                    for sample in reader.samples::<f32>() {
                        sample.map_err(invalid)?;
                    }
                }
            }
            (spec, frames)
        };

        Ok(Self {
            tone,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            frames,
            bytes,
        })
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Every tone of the palette, loaded from one directory
#[derive(Debug, Clone)]
pub struct SoundBank {
    clips: Vec<SoundClip>,
}

impl SoundBank {
    /// Load all palette samples from `dir`, failing on the first bad file
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let mut clips = Vec::with_capacity(TONE_COUNT);

        for tone in TONE_PALETTE {
            let path = dir.join(tone.file_name());
            let bytes = std::fs::read(&path).map_err(|source| ArcsError::AssetIo {
                path: path.clone(),
                source,
            })?;
            let clip = SoundClip::from_wav_bytes(tone, bytes, &path)?;
            log::info!(
                "Loaded {} ({} Hz, {} ch, {:.2}s)",
                path.display(),
                clip.sample_rate,
                clip.channels,
                clip.duration_secs()
            );
            clips.push(clip);
        }

        Ok(Self { clips })
    }

    pub fn clips(&self) -> &[SoundClip] {
        &self.clips
    }

    /// Clip for a palette slot
    pub fn clip(&self, handle: SoundHandle) -> &SoundClip {
        &self.clips[handle.slot() % self.clips.len()]
    }
}

/// Fire-and-forget playback requested by the frame loop
pub trait AudioSink {
    /// Start playing the sample behind `sound`; must not block
    fn play(&mut self, sound: SoundHandle);
}

/// Sink that plays nothing but counts what it was asked to play
#[derive(Debug, Default)]
pub struct SilentAudio {
    /// Requests per palette slot
    pub plays_per_tone: [u64; TONE_COUNT],
    pub last_played: Option<SoundHandle>,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_plays(&self) -> u64 {
        self.plays_per_tone.iter().sum()
    }
}

impl AudioSink for SilentAudio {
    fn play(&mut self, sound: SoundHandle) {
        log::debug!("(silent) {}", Tone::from_handle(sound).note_name());
        self.plays_per_tone[sound.slot()] += 1;
        self.last_played = Some(sound);
    }
}

#[cfg(feature = "playback")]
pub use device::AudioManager;

#[cfg(feature = "playback")]
mod device {
    use std::io::Cursor;

    use rodio::source::Buffered;
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

    use super::{AudioSink, SoundBank, Tone};
    use crate::error::{ArcsError, Result};
    use crate::sim::SoundHandle;

    type Clip = Buffered<Decoder<Cursor<Vec<u8>>>>;

    /// Plays palette samples on the default output device
    pub struct AudioManager {
        /// Keeps the device open; dropping it silences the handle
        _stream: OutputStream,
        handle: OutputStreamHandle,
        clips: Vec<Clip>,
        volume: f32,
    }

    impl AudioManager {
        /// `volume` is the already-resolved output level (0.0 - 1.0)
        pub fn new(bank: &SoundBank, volume: f32) -> Result<Self> {
            let (stream, handle) =
                OutputStream::try_default().map_err(|e| ArcsError::AudioDevice(e.to_string()))?;

            let clips = bank
                .clips()
                .iter()
                .map(|clip| {
                    Decoder::new(Cursor::new(clip.bytes().to_vec()))
                        .map(|decoder| decoder.buffered())
                        .map_err(|e| {
                            ArcsError::AudioDevice(format!("{}: {}", clip.tone.file_name(), e))
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Self {
                _stream: stream,
                handle,
                clips,
                volume: volume.clamp(0.0, 1.0),
            })
        }
    }

    impl AudioSink for AudioManager {
        fn play(&mut self, sound: SoundHandle) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }
            let Some(clip) = self.clips.get(sound.slot()) else {
                return;
            };

            let source = clip.clone().amplify(vol).convert_samples::<f32>();
            if let Err(e) = self.handle.play_raw(source) {
                log::warn!("Failed to play {}: {}", Tone::from_handle(sound).note_name(), e);
            }
        }
    }
}
