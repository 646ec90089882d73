use std::path::Path;

use soundboard::{AudioBackend, RodioBackend, SilentBackend, SoundBoard, SoundId};

use centro::control::AudioControl;
use centro::header::{HeaderNode, build_auth_view, build_header_nodes};
use centro::session::SessionStore;
use centro::wiring::{UiEvent, WidgetKind, dispatch};

fn main() {
    env_logger::init();

    let store = SessionStore::from_env();
    let session = store.load();
    let view = build_auth_view(session.as_deref(), "/Pokemon.html");
    for node in build_header_nodes(&view) {
        match node {
            HeaderNode::Label(text) => println!("{text}"),
            HeaderNode::Link { label, href, active } => {
                let marker = if active { " (active)" } else { "" };
                println!("{label} -> {href}{marker}");
            }
            HeaderNode::Action { label, .. } => println!("[{label}]"),
        }
    }

    // The shell runs without a device; sound just degrades silently.
    let backend: Box<dyn AudioBackend> = match RodioBackend::new() {
        Ok(backend) => Box::new(backend),
        Err(err) => {
            log::warn!("audio device unavailable, running silent: {err}");
            Box::new(SilentBackend::default())
        }
    };
    let mut board = SoundBoard::new(backend);
    board.initialize(Path::new("."));

    // The control starts seeded at the default percent; firing an input
    // event here would overwrite the open cue's half-volume discount.
    let control = AudioControl::new(0, 101);
    let toggle = control.toggle_state();
    log::debug!(
        "audio control ready: {}% {}",
        control.slider.percent,
        toggle.tooltip
    );

    board.play(SoundId::Open);
    dispatch(&mut board, UiEvent::Click(WidgetKind::Button));
}
