pub mod backend;
pub mod board;
pub mod cry;
pub mod error;
pub mod sound;
pub mod types;

pub use backend::{AudioBackend, ClipHandle, RodioBackend, SilentBackend};
pub use board::SoundBoard;
pub use cry::CryLocator;
pub use error::AudioError;
pub use sound::SoundId;
