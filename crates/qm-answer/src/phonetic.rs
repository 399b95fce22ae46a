//! Double Metaphone phonetic encoding.
//!
//! Catches speech-to-text errors where the transcript is spelled differently
//! but sounds the same as the expected answer ("Smyth" for "Smith",
//! "Night" for "Knight"). Each input produces a primary code and, where the
//! pronunciation is ambiguous, an alternate secondary code.

use serde::{Deserialize, Serialize};

const MAX_CODE_LEN: usize = 4;

/// Leading letter pairs whose first letter is silent.
const SILENT_STARTS: &[&str] = &["GN", "KN", "PN", "WR", "PS"];

/// "CH" at the start of these (after the C) is hard, as in "chorus".
const GREEK_CH: &[&str] = &["HARAC", "HARIS", "HOR", "HYM", "HIA", "HEM"];

/// Phonetic code of a word or phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MetaphoneCode {
    /// At most 4 characters; empty when the input had no letters
    pub primary: String,
    /// Alternate pronunciation, `None` when it would equal `primary`
    pub secondary: Option<String>,
}

impl MetaphoneCode {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Whether the two codes share a pronunciation.
    ///
    /// Empty codes never match anything, so digits or symbols alone cannot
    /// produce a phonetic hit.
    pub fn matches(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.primary == other.primary
            || self.secondary.as_deref() == Some(other.primary.as_str())
            || other.secondary.as_deref() == Some(self.primary.as_str())
            || (self.secondary.is_some() && self.secondary == other.secondary)
    }
}

/// Encode `text` into its Double Metaphone code.
///
/// Case is ignored and everything that is not an ASCII letter is dropped,
/// so a multi-word phrase is encoded as one run of letters.
pub fn encode(text: &str) -> MetaphoneCode {
    let letters: Vec<char> = text
        .chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_alphabetic)
        .collect();

    if letters.is_empty() {
        return MetaphoneCode::default();
    }

    Encoder::new(&letters).run()
}

/// Encode each whitespace-separated word of `text` on its own.
pub fn encode_words(text: &str) -> Vec<MetaphoneCode> {
    text.split_whitespace().map(encode).collect()
}

/// Whether `a` and `b` sound alike under Double Metaphone.
pub fn sounds_alike(a: &str, b: &str) -> bool {
    encode(a).matches(&encode(b))
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
}

/// Cursor over the cleaned, uppercased letters with the two code buffers.
struct Encoder<'a> {
    letters: &'a [char],
    pos: usize,
    primary: String,
    secondary: String,
}

impl<'a> Encoder<'a> {
    fn new(letters: &'a [char]) -> Self {
        Self {
            letters,
            pos: 0,
            primary: String::with_capacity(MAX_CODE_LEN),
            secondary: String::with_capacity(MAX_CODE_LEN),
        }
    }

    fn run(mut self) -> MetaphoneCode {
        if SILENT_STARTS.iter().any(|p| self.starts_at(0, p)) {
            self.pos = 1;
        } else if self.letters[0] == 'X' {
            self.add("S");
            self.pos = 1;
        }

        while self.pos < self.letters.len() {
            let current = self.letters[self.pos];
            match current {
                'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                    if self.pos == 0 {
                        self.add("A");
                    }
                    self.pos += 1;
                }
                'B' => self.add_collapsed("P", 'B'),
                'C' => self.encode_c(),
                'D' => self.encode_d(),
                'F' => self.add_collapsed("F", 'F'),
                'G' => self.encode_g(),
                'H' => self.encode_h(),
                'J' => {
                    if self.pos == 0 {
                        self.add_pair("J", "A");
                    } else {
                        self.add("J");
                    }
                    self.skip_double('J');
                }
                'K' => self.add_collapsed("K", 'K'),
                'L' => self.add_collapsed("L", 'L'),
                'M' => self.add_collapsed("M", 'M'),
                'N' => self.add_collapsed("N", 'N'),
                'P' => self.encode_p(),
                'Q' => self.add_collapsed("K", 'Q'),
                'R' => self.add_collapsed("R", 'R'),
                'S' => self.encode_s(),
                'T' => self.encode_t(),
                'V' => self.add_collapsed("F", 'V'),
                'W' => self.encode_w(),
                'X' => {
                    self.add("KS");
                    self.pos += if matches!(self.next(), Some('C' | 'X')) { 2 } else { 1 };
                }
                'Z' => self.add_collapsed("S", 'Z'),
                // Only ASCII letters reach the encoder
                _ => unreachable!("non-letter {current:?} in cleaned input"),
            }
        }

        self.finish()
    }

    fn finish(mut self) -> MetaphoneCode {
        self.primary.truncate(MAX_CODE_LEN);
        self.secondary.truncate(MAX_CODE_LEN);

        let secondary = (!self.secondary.is_empty() && self.secondary != self.primary)
            .then_some(self.secondary);

        MetaphoneCode {
            primary: self.primary,
            secondary,
        }
    }

    // --- Cursor helpers ---

    fn char_at(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    fn next(&self) -> Option<char> {
        self.char_at(self.pos + 1)
    }

    fn prev(&self) -> Option<char> {
        self.pos.checked_sub(1).and_then(|i| self.char_at(i))
    }

    fn starts_at(&self, index: usize, pattern: &str) -> bool {
        let Some(rest) = self.letters.get(index..) else {
            return false;
        };
        rest.len() >= pattern.len() && rest.iter().zip(pattern.chars()).all(|(a, b)| *a == b)
    }

    fn here(&self, pattern: &str) -> bool {
        self.starts_at(self.pos, pattern)
    }

    // --- Output helpers ---

    fn add(&mut self, code: &str) {
        self.primary.push_str(code);
        self.secondary.push_str(code);
    }

    fn add_pair(&mut self, primary: &str, secondary: &str) {
        self.primary.push_str(primary);
        self.secondary.push_str(secondary);
    }

    /// Step past the current letter, and its twin if it is doubled.
    fn skip_double(&mut self, letter: char) {
        self.pos += if self.next() == Some(letter) { 2 } else { 1 };
    }

    fn add_collapsed(&mut self, code: &str, letter: char) {
        self.add(code);
        self.skip_double(letter);
    }

    // --- Letter rules ---

    fn encode_c(&mut self) {
        if self.next() == Some('H') {
            let (primary, secondary) = self.ch_sound();
            self.add_pair(primary, secondary);
            self.pos += 2;
            return;
        }

        // "accident", "succeed"
        if self.here("CC") && matches!(self.char_at(self.pos + 2), Some('E' | 'I' | 'Y')) {
            self.add("KS");
            self.pos += 3;
            return;
        }

        if matches!(self.next(), Some('E' | 'I' | 'Y')) {
            self.add("S");
            self.pos += 2;
            return;
        }

        self.add("K");
        self.pos += if matches!(self.next(), Some('C' | 'K' | 'Q')) { 2 } else { 1 };
    }

    fn ch_sound(&self) -> (&'static str, &'static str) {
        // "michael"
        if self.pos > 0 && self.here("CHAE") {
            return ("K", "X");
        }

        // "chorus", "character"
        if self.pos == 0
            && GREEK_CH.iter().any(|p| self.starts_at(1, p))
            && !self.starts_at(0, "CHORE")
        {
            return ("K", "K");
        }

        // "schmidt", "orchestra", "christ"
        let after = self.char_at(self.pos + 2);
        let hard_after = matches!(
            after,
            None | Some('L' | 'R' | 'N' | 'M' | 'B' | 'H' | 'F' | 'V' | 'W')
        );
        let soft_before = self.pos == 0 || matches!(self.prev(), Some('A' | 'O' | 'U' | 'E'));
        if self.prev() == Some('S') || matches!(after, Some('T' | 'S')) || (soft_before && hard_after)
        {
            return ("K", "K");
        }

        if self.pos == 0 {
            ("X", "X")
        } else if self.starts_at(0, "MC") {
            ("K", "K")
        } else {
            ("X", "K")
        }
    }

    fn encode_d(&mut self) {
        if self.here("DG") && matches!(self.char_at(self.pos + 2), Some('E' | 'I' | 'Y')) {
            self.add("J");
            self.pos += 3;
        } else if self.here("DT") || self.here("DD") {
            self.add("T");
            self.pos += 2;
        } else {
            self.add("T");
            self.pos += 1;
        }
    }

    fn encode_g(&mut self) {
        match self.next() {
            Some('H') => {
                if self.pos == 0 {
                    // "ghislaine" vs "ghost"
                    let code = if self.char_at(2) == Some('I') { "J" } else { "K" };
                    self.add(code);
                } else if !self.prev().is_some_and(is_vowel) {
                    self.add("K");
                }
                // otherwise silent, as in "night"
                self.pos += 2;
            }
            // silent before N: "gnome", "sign", "signed"
            Some('N') => self.pos += 1,
            Some('E' | 'I' | 'Y') => {
                self.add_pair("J", "K");
                self.pos += 2;
            }
            Some('G') => {
                self.add("K");
                self.pos += 2;
            }
            _ => {
                self.add("K");
                self.pos += 1;
            }
        }
    }

    fn encode_h(&mut self) {
        let after_vowel_or_start = self.pos == 0 || self.prev().is_some_and(is_vowel);
        if after_vowel_or_start && self.next().is_some_and(is_vowel) {
            self.add("H");
            self.pos += 2;
        } else {
            self.pos += 1;
        }
    }

    fn encode_p(&mut self) {
        if self.next() == Some('H') {
            self.add("F");
            self.pos += 2;
        } else {
            self.add("P");
            self.pos += if matches!(self.next(), Some('P' | 'B')) { 2 } else { 1 };
        }
    }

    fn encode_s(&mut self) {
        if self.here("SH") {
            self.add("X");
            self.pos += 2;
        } else if self.here("SIO") || self.here("SIA") {
            self.add_pair("S", "X");
            self.pos += 3;
        } else {
            self.add("S");
            self.pos += if matches!(self.next(), Some('S' | 'Z')) { 2 } else { 1 };
        }
    }

    fn encode_t(&mut self) {
        if self.here("TIA") || self.here("TIO") || self.here("TCH") {
            self.add("X");
            self.pos += 3;
        } else if self.here("TH") {
            self.add_pair("0", "T");
            self.pos += 2;
        } else {
            self.add("T");
            self.pos += if matches!(self.next(), Some('T' | 'D')) { 2 } else { 1 };
        }
    }

    fn encode_w(&mut self) {
        if self.here("WR") {
            self.add("R");
            self.pos += 2;
        } else if self.pos == 0 && self.next().is_some_and(is_vowel) {
            self.add_pair("A", "F");
            self.pos += 1;
        } else {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(primary: &str, secondary: Option<&str>) -> MetaphoneCode {
        MetaphoneCode {
            primary: primary.to_string(),
            secondary: secondary.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(""), code("", None));
        assert_eq!(encode("1234"), code("", None));
        assert_eq!(encode("!? --"), code("", None));
    }

    #[test]
    fn test_basic_codes() {
        assert_eq!(encode("Smith"), code("SM0", Some("SMT")));
        assert_eq!(encode("Einstein"), code("ANST", None));
        assert_eq!(encode("Philip"), code("FLP", None));
        assert_eq!(encode("Anna"), code("AN", None));
        assert_eq!(encode("Edge"), code("AJ", None));
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        assert_eq!(encode("smith"), encode("SMITH"));
        assert_eq!(encode("O'Neil"), encode("ONeil"));
    }

    #[test]
    fn test_codes_never_exceed_four_chars() {
        for word in ["Washington", "Constantinople", "Mississippi", "abcdefghijklmnop"] {
            let result = encode(word);
            assert!(result.primary.len() <= 4, "{word}: {result:?}");
            if let Some(secondary) = &result.secondary {
                assert!(secondary.len() <= 4);
                assert_ne!(secondary, &result.primary);
            }
        }
    }

    #[test]
    fn test_silent_initial_letters() {
        assert_eq!(encode("Knight").primary, "NT");
        assert_eq!(encode("Gnome").primary, "NM");
        assert_eq!(encode("Wright").primary, "RT");
        assert_eq!(encode("Psalm").primary, "SLM");
        assert_eq!(encode("Xavier").primary, "SFR");
    }

    #[test]
    fn test_ch_variants() {
        assert_eq!(encode("Charles"), code("XRLS", None));
        assert_eq!(encode("Chris").primary, "KRS");
        assert_eq!(encode("Chorus").primary, "KRS");
        assert_eq!(encode("Michael"), code("MKL", Some("MXL")));
    }

    #[test]
    fn test_dual_codes() {
        assert_eq!(encode("William"), code("ALM", Some("FLM")));
        assert_eq!(encode("Jose"), code("JS", Some("AS")));
        assert_eq!(encode("Asia"), code("AS", Some("AX")));
        assert_eq!(encode("George").secondary.as_deref(), Some("KRK"));
    }

    #[test]
    fn test_t_rules() {
        assert_eq!(encode("Nation").primary, "NXN");
        assert_eq!(encode("Thomas"), code("0MS", Some("TMS")));
        assert_eq!(encode("Butcher").primary, "PXR");
    }

    #[test]
    fn test_sounds_alike_transcription_errors() {
        assert!(sounds_alike("Smith", "Smyth"));
        assert!(sounds_alike("Knight", "Night"));
        assert!(sounds_alike("Philip", "Filip"));
        assert!(sounds_alike("Catherine", "Kathryn"));
        assert!(sounds_alike("Einstein", "Einstien"));
        assert!(sounds_alike("Wright", "Right"));
    }

    #[test]
    fn test_sounds_alike_rejects_different_words() {
        assert!(!sounds_alike("Paris", "London"));
        assert!(!sounds_alike("Newton", "Darwin"));
        assert!(!sounds_alike("cat", "dog"));
    }

    #[test]
    fn test_sounds_alike_secondary_codes() {
        // "Thomas" has secondary TMS, "Tomas" has primary TMS
        assert!(sounds_alike("Thomas", "Tomas"));
        assert!(sounds_alike("Tomas", "Thomas"));
    }

    #[test]
    fn test_sounds_alike_empty_never_matches() {
        assert!(!sounds_alike("", ""));
        assert!(!sounds_alike("", "Smith"));
        assert!(!sounds_alike("42", "42"));
        assert!(!sounds_alike("1776", "Smith"));
    }

    #[test]
    fn test_sounds_alike_symmetric() {
        let words = ["Smith", "Smyth", "Thomas", "Tomas", "Jose", "Asia", "", "42", "William"];
        for a in words {
            for b in words {
                assert_eq!(sounds_alike(a, b), sounds_alike(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_encode_words() {
        let codes = encode_words("Albert  Einstein");
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0].primary, "ALPR");
        assert_eq!(codes[1].primary, "ANST");
        assert!(encode_words("   ").is_empty());
    }
}
