//! UI-event → sound dispatch for page widgets.

use soundboard::{SoundBoard, SoundId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Button,
    Card,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    HoverEnter(WidgetKind),
    Click(WidgetKind),
}

/// Hover covers buttons and cards; click sounds fire on buttons only.
pub fn sound_for_event(event: UiEvent) -> Option<SoundId> {
    match event {
        UiEvent::HoverEnter(WidgetKind::Button | WidgetKind::Card) => Some(SoundId::Hover),
        UiEvent::Click(WidgetKind::Button) => Some(SoundId::BtnClick),
        _ => None,
    }
}

pub fn dispatch(board: &mut SoundBoard, event: UiEvent) {
    if let Some(id) = sound_for_event(event) {
        board.play(id);
    }
}
