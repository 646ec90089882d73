//! Cry asset resolution: one candidate path per generation bucket.

use std::path::PathBuf;

/// Bucket count the site ships today. Only the first few folders are
/// populated; the rest exist for assets added later.
pub const DEFAULT_GENERATIONS: usize = 13;

/// Ordered candidate directories for cry playback.
///
/// The bucket list is configuration, not a constant: callers may supply
/// their own roots, and candidates are always yielded in declaration
/// order so the first populated bucket wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryLocator {
    roots: Vec<PathBuf>,
}

impl Default for CryLocator {
    fn default() -> Self {
        Self::with_generations(DEFAULT_GENERATIONS)
    }
}

impl CryLocator {
    /// Builds the site's bucket layout for the first `count` generations:
    /// `sons/cries/cries/Generation 1`, then `sons/cries/cries (n)/Generation n`.
    pub fn with_generations(count: usize) -> Self {
        let roots = (1..=count.max(1))
            .map(|n| {
                let folder = if n == 1 {
                    "cries".to_string()
                } else {
                    format!("cries ({n})")
                };
                PathBuf::from("sons/cries")
                    .join(folder)
                    .join(format!("Generation {n}"))
            })
            .collect();
        Self { roots }
    }

    pub fn from_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Candidate files for `id`, in declaration order.
    pub fn candidates(&self, id: u32) -> impl Iterator<Item = PathBuf> + '_ {
        let file = cry_file_name(id);
        self.roots.iter().map(move |root| root.join(&file))
    }
}

/// Formats a species id as the cry asset name, zero-padded to three digits.
pub fn cry_file_name(id: u32) -> String {
    format!("SE_PV{id:03}.wav")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cry_file_name_zero_pads_to_three_digits() {
        assert_eq!(cry_file_name(5), "SE_PV005.wav");
        assert_eq!(cry_file_name(25), "SE_PV025.wav");
        assert_eq!(cry_file_name(150), "SE_PV150.wav");
        assert_eq!(cry_file_name(1000), "SE_PV1000.wav");
    }

    #[test]
    fn default_locator_has_thirteen_buckets_in_order() {
        let locator = CryLocator::default();
        assert_eq!(locator.roots().len(), DEFAULT_GENERATIONS);

        let candidates: Vec<_> = locator.candidates(25).collect();
        assert_eq!(
            candidates[0],
            PathBuf::from("sons/cries/cries/Generation 1/SE_PV025.wav")
        );
        assert_eq!(
            candidates[1],
            PathBuf::from("sons/cries/cries (2)/Generation 2/SE_PV025.wav")
        );
        assert_eq!(
            candidates[12],
            PathBuf::from("sons/cries/cries (13)/Generation 13/SE_PV025.wav")
        );
    }

    #[test]
    fn custom_roots_are_yielded_verbatim() {
        let locator = CryLocator::from_roots(vec![PathBuf::from("a"), PathBuf::from("b")]);
        let candidates: Vec<_> = locator.candidates(7).collect();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], PathBuf::from("a/SE_PV007.wav"));
        assert_eq!(candidates[1], PathBuf::from("b/SE_PV007.wav"));
    }
}
