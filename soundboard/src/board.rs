//! The sound board: registry, playback state, and dispatch.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::backend::{AudioBackend, ClipHandle};
use crate::cry::CryLocator;
use crate::sound::{MANIFEST, SoundId, UI_SOUND_DIR};
use crate::types::sound_for_type;

/// Global volume before the user touches the slider.
pub const DEFAULT_VOLUME: f32 = 0.3;

/// The page-open cue sits under the rest of the interface sounds.
pub const OPEN_VOLUME_SCALE: f32 = 0.5;

/// Owns the loaded interface sounds plus the volume and mute flags.
///
/// No play operation returns an error: a missing clip is a no-op and a
/// backend failure is logged and swallowed. Callers never have to handle
/// audio trouble.
pub struct SoundBoard {
    backend: Box<dyn AudioBackend>,
    clips: HashMap<SoundId, ClipHandle>,
    volume: f32,
    muted: bool,
    cries: CryLocator,
    asset_root: PathBuf,
}

impl SoundBoard {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            clips: HashMap::new(),
            volume: DEFAULT_VOLUME,
            muted: false,
            cries: CryLocator::default(),
            asset_root: PathBuf::new(),
        }
    }

    pub fn with_cry_locator(mut self, cries: CryLocator) -> Self {
        self.cries = cries;
        self
    }

    /// Loads every manifest entry from under `asset_root`.
    ///
    /// An individual load failure is logged and skipped so the remaining
    /// clips still come up. Each loaded clip gets the current global
    /// volume; the open cue gets half of it.
    pub fn initialize(&mut self, asset_root: &Path) {
        self.asset_root = asset_root.to_path_buf();
        let dir = self.asset_root.join(UI_SOUND_DIR);
        for &id in MANIFEST {
            let path = dir.join(id.file_name());
            match self.backend.load(&path) {
                Ok(handle) => {
                    let scale = if id == SoundId::Open {
                        OPEN_VOLUME_SCALE
                    } else {
                        1.0
                    };
                    self.backend.set_clip_volume(handle, self.volume * scale);
                    self.clips.insert(id, handle);
                }
                Err(err) => log::warn!("skipping sound {id:?}: {err}"),
            }
        }
    }

    /// Plays `id` from the start. No-op when muted or when the clip never
    /// loaded; a playback failure is logged, never returned.
    pub fn play(&mut self, id: SoundId) {
        if self.muted {
            return;
        }
        let Some(&handle) = self.clips.get(&id) else {
            return;
        };
        if let Err(err) = self.backend.play(handle) {
            log::warn!("failed to play {id:?}: {err}");
        }
    }

    /// Resolves a type label and plays its sound; unknown labels are
    /// silently ignored.
    pub fn play_by_type(&mut self, label: &str) {
        if let Some(id) = sound_for_type(label) {
            self.play(id);
        }
    }

    /// Plays the cry for a species id, probing the generation buckets
    /// strictly in order. Each candidate must fail before the next is
    /// tried, so at most one cry starts per call. Exhausting the list is
    /// not an error.
    pub fn play_cry(&mut self, id: u32) {
        if self.muted {
            return;
        }
        for candidate in self.cries.candidates(id) {
            let path = self.asset_root.join(candidate);
            match self.backend.play_file(&path, self.volume) {
                Ok(()) => return,
                Err(err) => {
                    log::debug!("cry candidate {} unavailable: {err}", path.display());
                }
            }
        }
        log::info!("no cry found for id {id}");
    }

    /// Clamps to [0, 1] and applies the new volume uniformly to every
    /// clip. The open cue's half-volume scale does not survive this call;
    /// it only returns on re-initialization.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        for &handle in self.clips.values() {
            self.backend.set_clip_volume(handle, self.volume);
        }
    }

    /// Flips the mute flag and returns the new value. Anything already
    /// playing keeps playing.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn is_loaded(&self, id: SoundId) -> bool {
        self.clips.contains_key(&id)
    }
}
