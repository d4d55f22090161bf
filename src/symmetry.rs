//! Mirror tables for horizontal and vertical glyph symmetry
//!
//! The ornament font arranges its pieces on the keyboard in small blocks
//! (`QWE/ASD/ZXC`, `RT/FG/VB`, `YU/HJ`, `IOP`). Mirroring a piece
//! left-to-right swaps it with the key on the other side of its block;
//! mirroring top-to-bottom swaps it with the key above or below.
//! Only some keys have a lower-case (undotted) variant, so a lower-case
//! pair exists only when both of its keys have one.
//! Characters outside a table mirror to themselves.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

/// Errors that can occur while building a symmetry map
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymmetryError {
    /// A character was paired with two different partners
    #[error("'{ch}' is paired with both '{first}' and '{second}'")]
    Conflict { ch: char, first: char, second: char },
}

/// Keys that have a lower-case (undotted) glyph
const LOWERCASE_GLYPHS: &str = "qwertyuadfghjzxc";

/// Left/right mirror pairs, upper case. Lower case is derived.
const X_PAIRS: &[(char, char)] = &[
    ('Q', 'E'),
    ('A', 'D'),
    ('Z', 'C'),
    ('R', 'T'),
    ('F', 'G'),
    ('V', 'B'),
    ('Y', 'U'),
    ('H', 'J'),
    ('I', 'P'),
];

/// Top/bottom mirror pairs, upper case. Lower case is derived.
const Y_PAIRS: &[(char, char)] = &[
    ('Q', 'Z'),
    ('W', 'X'),
    ('E', 'C'),
    ('R', 'V'),
    ('T', 'B'),
    ('Y', 'H'),
    ('U', 'J'),
];

/// Horizontal (left/right) mirror map
pub static X_MAP: LazyLock<SymmetryMap> = LazyLock::new(|| SymmetryMap::from_glyph_pairs(X_PAIRS));

/// Vertical (top/bottom) mirror map
pub static Y_MAP: LazyLock<SymmetryMap> = LazyLock::new(|| SymmetryMap::from_glyph_pairs(Y_PAIRS));

/// An involutive character substitution table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymmetryMap {
    pairs: HashMap<char, char>,
}

impl SymmetryMap {
    /// Build a map from one-directional pairs; the reverse direction is added automatically.
    ///
    /// A pair `(c, c)` is allowed and is the same as leaving `c` out.
    pub fn from_pairs(pairs: &[(char, char)]) -> Result<Self, SymmetryError> {
        let mut map = HashMap::new();
        for &(a, b) in pairs {
            insert_unique(&mut map, a, b)?;
            insert_unique(&mut map, b, a)?;
        }
        Ok(Self { pairs: map })
    }

    /// Built-in tables are checked by the unit tests, so conflicts cannot occur here.
    fn from_glyph_pairs(upper: &[(char, char)]) -> Self {
        let mut pairs = HashMap::new();
        for &(a, b) in upper {
            pairs.insert(a, b);
            pairs.insert(b, a);
            let (la, lb) = (a.to_ascii_lowercase(), b.to_ascii_lowercase());
            if LOWERCASE_GLYPHS.contains(la) && LOWERCASE_GLYPHS.contains(lb) {
                pairs.insert(la, lb);
                pairs.insert(lb, la);
            }
        }
        Self { pairs }
    }

    /// Mirror a single character
    pub fn mirror(&self, ch: char) -> char {
        self.pairs.get(&ch).copied().unwrap_or(ch)
    }

    /// Mirror every character of a line, keeping order and length
    pub fn mirror_line(&self, line: &str) -> String {
        line.chars().map(|c| self.mirror(c)).collect()
    }

    /// Reverse a line and mirror each character: the reflection of the line
    /// across a vertical axis under this map.
    pub fn reflect_line(&self, line: &str) -> String {
        line.chars().rev().map(|c| self.mirror(c)).collect()
    }

    /// Number of characters that map to a different character
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn insert_unique(map: &mut HashMap<char, char>, from: char, to: char) -> Result<(), SymmetryError> {
    if from == to {
        return Ok(());
    }
    match map.get(&from) {
        Some(&existing) if existing != to => Err(SymmetryError::Conflict {
            ch: from,
            first: existing,
            second: to,
        }),
        _ => {
            map.insert(from, to);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_have_no_conflicts() {
        assert!(SymmetryMap::from_pairs(X_PAIRS).is_ok());
        assert!(SymmetryMap::from_pairs(Y_PAIRS).is_ok());
    }

    #[test]
    fn test_x_map_pairs_both_directions() {
        assert_eq!(X_MAP.mirror('Q'), 'E');
        assert_eq!(X_MAP.mirror('E'), 'Q');
        assert_eq!(X_MAP.mirror('q'), 'e');
        assert_eq!(X_MAP.mirror('W'), 'W');
    }

    #[test]
    fn test_y_map_pairs_both_directions() {
        assert_eq!(Y_MAP.mirror('q'), 'z');
        assert_eq!(Y_MAP.mirror('z'), 'q');
        assert_eq!(Y_MAP.mirror('A'), 'A');
    }

    #[test]
    fn test_lowercase_pairs_need_both_glyphs() {
        assert_eq!(X_MAP.mirror('r'), 't');
        assert_eq!(X_MAP.mirror('v'), 'v');
        assert_eq!(X_MAP.mirror('i'), 'i');
        assert_eq!(Y_MAP.mirror('r'), 'r');
        assert_eq!(Y_MAP.mirror('t'), 't');
        assert_eq!(Y_MAP.mirror('R'), 'V');
        assert_eq!(Y_MAP.mirror('y'), 'h');
    }

    #[test]
    fn test_mirror_is_involutive() {
        let samples = "QWERTYUIOPASDFGHJKLZXCVBNMqwertyuiopasdfghjklzxcvbnm Ss*.é";
        for map in [&*X_MAP, &*Y_MAP] {
            for c in samples.chars() {
                assert_eq!(map.mirror(map.mirror(c)), c, "char {:?}", c);
            }
        }
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(X_MAP.mirror_line("s S."), "s S.");
    }

    #[test]
    fn test_mirror_line_keeps_order() {
        assert_eq!(X_MAP.mirror_line("qwa"), "ewd");
    }

    #[test]
    fn test_reflect_line() {
        assert_eq!(X_MAP.reflect_line("qwa"), "dwe");
    }

    #[test]
    fn test_from_pairs_rejects_conflict() {
        let err = SymmetryMap::from_pairs(&[('a', 'b'), ('a', 'c')]).unwrap_err();
        assert_eq!(
            err,
            SymmetryError::Conflict {
                ch: 'a',
                first: 'b',
                second: 'c'
            }
        );
    }

    #[test]
    fn test_from_pairs_self_pair_is_identity() {
        let map = SymmetryMap::from_pairs(&[('a', 'a')]).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.mirror('a'), 'a');
    }
}
