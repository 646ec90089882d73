//! Seam between the sound board and the host audio device.

use std::io::Cursor;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::error::AudioError;

/// Opaque name for one clip loaded into a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipHandle(pub usize);

/// Playback operations the board needs from the host.
///
/// `play` always restarts the clip from position zero. `play_file` must
/// fail before returning when the file is absent or undecodable, so
/// callers can probe fallback candidates strictly in order without
/// overlapping playback.
pub trait AudioBackend {
    fn load(&mut self, path: &Path) -> Result<ClipHandle, AudioError>;
    fn play(&mut self, clip: ClipHandle) -> Result<(), AudioError>;
    fn set_clip_volume(&mut self, clip: ClipHandle, volume: f32);
    fn play_file(&mut self, path: &Path, volume: f32) -> Result<(), AudioError>;
}

struct LoadedClip {
    bytes: Vec<u8>,
    volume: f32,
}

/// Device-backed implementation. Keeps one `OutputStream` alive for the
/// process and spawns a detached `Sink` per playback.
pub struct RodioBackend {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: Vec<LoadedClip>,
}

impl RodioBackend {
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|_| AudioError::NoOutputDevice)?;
        Ok(Self {
            _stream: stream,
            handle,
            clips: Vec::new(),
        })
    }

    fn start_sink(&self, bytes: Vec<u8>, volume: f32) -> Result<(), AudioError> {
        let sink = Sink::try_new(&self.handle).map_err(|e| AudioError::Playback(e.to_string()))?;
        sink.set_volume(volume);
        let source =
            Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::Playback(e.to_string()))?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<ClipHandle, AudioError> {
        let bytes = std::fs::read(path).map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // Decode once up front so a corrupt asset fails at load, not mid-play.
        Decoder::new(Cursor::new(bytes.clone())).map_err(|_| AudioError::Decode {
            path: path.to_path_buf(),
        })?;
        self.clips.push(LoadedClip { bytes, volume: 1.0 });
        Ok(ClipHandle(self.clips.len() - 1))
    }

    fn play(&mut self, clip: ClipHandle) -> Result<(), AudioError> {
        let Some(loaded) = self.clips.get(clip.0) else {
            return Err(AudioError::UnknownClip);
        };
        self.start_sink(loaded.bytes.clone(), loaded.volume)
    }

    fn set_clip_volume(&mut self, clip: ClipHandle, volume: f32) {
        if let Some(loaded) = self.clips.get_mut(clip.0) {
            loaded.volume = volume;
        }
    }

    fn play_file(&mut self, path: &Path, volume: f32) -> Result<(), AudioError> {
        let bytes = std::fs::read(path).map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sink = Sink::try_new(&self.handle).map_err(|e| AudioError::Playback(e.to_string()))?;
        sink.set_volume(volume);
        let source = Decoder::new(Cursor::new(bytes)).map_err(|_| AudioError::Decode {
            path: path.to_path_buf(),
        })?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}

/// Accepts every call and plays nothing. Used when no output device
/// exists so the shell keeps running with sound silently degraded.
#[derive(Debug, Default)]
pub struct SilentBackend {
    loaded: usize,
}

impl AudioBackend for SilentBackend {
    fn load(&mut self, _path: &Path) -> Result<ClipHandle, AudioError> {
        self.loaded += 1;
        Ok(ClipHandle(self.loaded - 1))
    }

    fn play(&mut self, _clip: ClipHandle) -> Result<(), AudioError> {
        Ok(())
    }

    fn set_clip_volume(&mut self, _clip: ClipHandle, _volume: f32) {}

    fn play_file(&mut self, _path: &Path, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }
}
