//! Floating audio control: a 0–100 volume slider plus a mute toggle.
//!
//! Pointer handling and drawing stay in the host UI; these types provide
//! the value mapping and the state the host renders.

use soundboard::SoundBoard;

/// Initial slider position, matching the board's default volume.
pub const DEFAULT_PERCENT: u8 = 30;

/// Horizontal slider track + current percent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeSlider {
    pub track_x: u32,
    pub track_w: u32,
    pub percent: u8,
}

impl VolumeSlider {
    pub fn new(track_x: u32, track_w: u32, percent: u8) -> Self {
        Self {
            track_x,
            track_w,
            percent: percent.min(100),
        }
    }

    /// Maps a pointer x position onto the track, clamped to its ends.
    pub fn percent_from_x(&self, x: u32) -> u8 {
        if self.track_w <= 1 {
            return 0;
        }
        let left = self.track_x;
        let right = self.track_x.saturating_add(self.track_w - 1);
        let clamped = x.clamp(left, right);
        let t = (clamped - left) as f32 / (self.track_w - 1) as f32;
        (t * 100.0).round() as u8
    }

    pub fn set_from_x(&mut self, x: u32) {
        self.percent = self.percent_from_x(x);
    }

    pub fn thumb_x(&self) -> u32 {
        if self.track_w == 0 {
            return self.track_x;
        }
        let t = self.percent as f32 / 100.0;
        self.track_x
            .saturating_add(((self.track_w - 1) as f32 * t).round() as u32)
    }
}

/// Toggle button presentation for the current mute state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub muted: bool,
}

pub struct AudioControl {
    pub slider: VolumeSlider,
    muted: bool,
}

impl AudioControl {
    pub fn new(track_x: u32, track_w: u32) -> Self {
        Self {
            slider: VolumeSlider::new(track_x, track_w, DEFAULT_PERCENT),
            muted: false,
        }
    }

    /// Range-input path: a 0–100 percent drives the board's [0, 1] volume.
    pub fn handle_slider_input(&mut self, board: &mut SoundBoard, percent: u8) {
        let percent = percent.min(100);
        self.slider.percent = percent;
        board.set_volume(f32::from(percent) / 100.0);
    }

    /// Pointer path: converts track x to a percent, then applies it.
    pub fn handle_pointer(&mut self, board: &mut SoundBoard, x: u32) {
        let percent = self.slider.percent_from_x(x);
        self.handle_slider_input(board, percent);
    }

    pub fn handle_toggle(&mut self, board: &mut SoundBoard) -> ToggleState {
        self.muted = board.toggle_mute();
        self.toggle_state()
    }

    pub fn toggle_state(&self) -> ToggleState {
        if self.muted {
            ToggleState {
                icon: "🔇",
                tooltip: "Som Desligado",
                muted: true,
            }
        } else {
            ToggleState {
                icon: "🔊",
                tooltip: "Som Ligado",
                muted: false,
            }
        }
    }
}
