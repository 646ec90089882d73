//! Mapping from Pokémon type label to interface sound.

use crate::sound::SoundId;

/// Resolves a type label to its sound, case-insensitively.
///
/// The table is static and many-to-one: several types share a sound, and
/// the Portuguese labels the site displays alias their English names.
/// Unknown labels resolve to `None`.
pub fn sound_for_type(label: &str) -> Option<SoundId> {
    let label = label.to_lowercase();
    let id = match label.as_str() {
        "fire" | "fogo" => SoundId::Fire,
        "water" | "água" => SoundId::Water,
        "grass" | "planta" => SoundId::Grass,
        "electric" | "elétrico" => SoundId::TimeUp,
        "normal" => SoundId::Open,
        "fighting" | "lutador" => SoundId::BlockCatch,
        "poison" | "veneno" => SoundId::Hurry,
        "ground" | "terra" => SoundId::TimeDown,
        "flying" | "voador" => SoundId::Warp,
        "psychic" | "psíquico" => SoundId::HintOpen,
        "bug" | "inseto" => SoundId::RollOver04,
        "rock" | "pedra" => SoundId::BlockCatch,
        "ghost" | "fantasma" => SoundId::HintOver,
        "dragon" | "dragão" => SoundId::Highscore,
        "dark" | "trevas" => SoundId::TimeDown,
        "steel" | "metal" => SoundId::Key,
        "fairy" | "fada" => SoundId::Perfect,
        "ice" | "gelo" => SoundId::Clear,
        _ => return None,
    };
    Some(id)
}
