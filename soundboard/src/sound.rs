//! Interface sound identifiers and the bundled asset manifest.

/// One of the interface sounds shipped with the site shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    BtnClick,
    BtnClick2,
    Hover,
    Open,
    ItemGet,
    Clear,
    Perfect,
    Start,
    PointGet,
    Fire,
    Water,
    Grass,
    Jump,
    Warp,
    TimeUp,
    TimeDown,
    Highscore,
    Hurry,
    HintOpen,
    HintOver,
    RollOver04,
    BlockCatch,
    Key,
}

impl SoundId {
    /// Asset file name under [`UI_SOUND_DIR`].
    pub fn file_name(self) -> &'static str {
        match self {
            SoundId::BtnClick => "btnClick01.mp3",
            SoundId::BtnClick2 => "btnClick02.mp3",
            SoundId::Hover => "rollOver03.mp3",
            SoundId::Open => "open.mp3",
            SoundId::ItemGet => "itemGet.mp3",
            SoundId::Clear => "clear.mp3",
            SoundId::Perfect => "perfect.mp3",
            SoundId::Start => "start.mp3",
            SoundId::PointGet => "pointGet.mp3",
            SoundId::Fire => "fire.mp3",
            SoundId::Water => "water.mp3",
            SoundId::Grass => "grass.mp3",
            SoundId::Jump => "jump.mp3",
            SoundId::Warp => "warp.mp3",
            SoundId::TimeUp => "timeUp.mp3",
            SoundId::TimeDown => "timeDown.mp3",
            SoundId::Highscore => "highscore.mp3",
            SoundId::Hurry => "hurry.mp3",
            SoundId::HintOpen => "hintOpen.mp3",
            SoundId::HintOver => "hintOver.mp3",
            SoundId::RollOver04 => "rollOver04.mp3",
            SoundId::BlockCatch => "blockCatch.mp3",
            SoundId::Key => "key.mp3",
        }
    }
}

/// Directory holding the interface sounds, relative to the asset root.
pub const UI_SOUND_DIR: &str = "sons/Pokémon Tick-Tock Walk";

/// Load order for [`SoundBoard::initialize`](crate::SoundBoard::initialize).
pub const MANIFEST: &[SoundId] = &[
    SoundId::BtnClick,
    SoundId::BtnClick2,
    SoundId::Hover,
    SoundId::Open,
    SoundId::ItemGet,
    SoundId::Clear,
    SoundId::Perfect,
    SoundId::Start,
    SoundId::PointGet,
    SoundId::Fire,
    SoundId::Water,
    SoundId::Grass,
    SoundId::Jump,
    SoundId::Warp,
    SoundId::TimeUp,
    SoundId::TimeDown,
    SoundId::Highscore,
    SoundId::Hurry,
    SoundId::HintOpen,
    SoundId::HintOver,
    SoundId::RollOver04,
    SoundId::BlockCatch,
    SoundId::Key,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_covers_every_sound_once() {
        assert_eq!(MANIFEST.len(), 23);
        for (i, a) in MANIFEST.iter().enumerate() {
            for b in &MANIFEST[i + 1..] {
                assert_ne!(a, b, "duplicate manifest entry {a:?}");
            }
        }
    }

    #[test]
    fn file_names_are_unique() {
        for (i, a) in MANIFEST.iter().enumerate() {
            for b in &MANIFEST[i + 1..] {
                assert_ne!(a.file_name(), b.file_name());
            }
        }
    }
}
