// Character classification: token character classes and writing scripts

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character class as seen by a word tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Classify a character for tokenization.
///
/// Letters are anything Unicode considers alphabetic (which covers every
/// script, including combining marks attached to letters in Devanagari or
/// Thai). Digits are Unicode numeric characters. Whitespace and punctuation
/// follow the tables below; everything else is `Unknown`.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() || is_combining_mark(c) {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

fn is_punctuation_char(c: char) -> bool {
    let ascii_symbol = matches!(
        c,
        '#' | '$' | '%' | '*' | '+' | '<' | '=' | '>' | '@' | '\\' | '^' | '_' | '`' | '|' | '~'
    );
    (c.is_ascii_punctuation() && !ascii_symbol)
        || is_apostrophe(c)
        || is_hyphen(c)
        || is_quotation_mark(c)
        || matches!(
            c,
            '\u{00A1}' // ¡
                | '\u{00BF}' // ¿
                | '\u{00B7}' // MIDDLE DOT
                | '\u{2013}' // EN DASH
                | '\u{2014}' // EM DASH
                | '\u{2026}' // HORIZONTAL ELLIPSIS
                | '\u{3001}' // IDEOGRAPHIC COMMA
                | '\u{3002}' // IDEOGRAPHIC FULL STOP
                | '\u{05BE}' // HEBREW PUNCTUATION MAQAF
                | '\u{05C3}' // HEBREW PUNCTUATION SOF PASUQ
                | '\u{060C}' // ARABIC COMMA
                | '\u{061F}' // ARABIC QUESTION MARK
        )
}

/// Combining marks in the ranges used by the scripts the identifier knows.
fn is_combining_mark(c: char) -> bool {
    let cp = c as u32;
    (0x0300..=0x036F).contains(&cp)     // combining diacritical marks
        || (0x0591..=0x05C7).contains(&cp) // Hebrew points
        || (0x064B..=0x065F).contains(&cp) // Arabic harakat
        || (0x0900..=0x0903).contains(&cp) // Devanagari signs
        || (0x093A..=0x094F).contains(&cp) // Devanagari vowel signs
        || (0x0E31..=0x0E3A).contains(&cp) // Thai vowel signs
        || (0x0E47..=0x0E4E).contains(&cp) // Thai tone marks
}

/// Whitespace, including the no-break and ideographic spaces.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{00A0}' || c == '\u{202F}' || c == '\u{180E}'
}

/// Apostrophe characters that may join a contraction ("don't", "l'homme").
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{02BC}')
}

/// Hyphen characters that may join a compound ("well-known").
pub fn is_hyphen(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{00AD}' // SOFT HYPHEN
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
    )
}

pub fn is_quotation_mark(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{00AB}' // «
            | '\u{00BB}' // »
            | '\u{2018}'
            | '\u{201A}'
            | '\u{201C}'
            | '\u{201D}'
            | '\u{201E}'
            | '\u{2039}'
            | '\u{203A}'
    )
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// One-to-one lowercase mapping. Characters whose lowercase form expands to
/// several characters map to the first of them.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// One-to-one uppercase mapping, see [`simple_lower`].
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

// ---------------------------------------------------------------------------
// Writing scripts
// ---------------------------------------------------------------------------

/// Writing script of a character, for the scripts language identification
/// can decide on without a lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    Latin,
    Greek,
    Cyrillic,
    Hebrew,
    Arabic,
    Devanagari,
    Thai,
    Hangul,
    Kana,
    Han,
}

impl Script {
    /// Every script, in declaration order.
    pub const ALL: [Script; 10] = [
        Script::Latin,
        Script::Greek,
        Script::Cyrillic,
        Script::Hebrew,
        Script::Arabic,
        Script::Devanagari,
        Script::Thai,
        Script::Hangul,
        Script::Kana,
        Script::Han,
    ];

    /// ISO 15924 code.
    pub fn code(self) -> &'static str {
        match self {
            Script::Latin => "Latn",
            Script::Greek => "Grek",
            Script::Cyrillic => "Cyrl",
            Script::Hebrew => "Hebr",
            Script::Arabic => "Arab",
            Script::Devanagari => "Deva",
            Script::Thai => "Thai",
            Script::Hangul => "Hang",
            Script::Kana => "Kana",
            Script::Han => "Hani",
        }
    }
}

/// Script of a letter, or `None` for non-letters and unlisted scripts.
pub fn script_of(c: char) -> Option<Script> {
    let cp = c as u32;
    let script = match cp {
        0x0041..=0x005A | 0x0061..=0x007A | 0x00C0..=0x024F | 0x1E00..=0x1EFF => Script::Latin,
        0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
        0x0400..=0x052F => Script::Cyrillic,
        0x0590..=0x05FF | 0xFB1D..=0xFB4F => Script::Hebrew,
        0x0600..=0x06FF | 0x0750..=0x077F => Script::Arabic,
        0x0900..=0x097F => Script::Devanagari,
        0x0E00..=0x0E7F => Script::Thai,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
        0x3040..=0x30FF => Script::Kana,
        0x4E00..=0x9FFF | 0x3400..=0x4DBF => Script::Han,
        _ => return None,
    };
    // Multiplication sign and division sign sit inside the Latin-1 letter block
    if cp == 0xD7 || cp == 0xF7 {
        return None;
    }
    Some(script)
}

/// Whether a Latin letter carries a diacritic (anything outside ASCII).
pub fn is_accented_latin(c: char) -> bool {
    !c.is_ascii() && script_of(c) == Some(Script::Latin)
}
