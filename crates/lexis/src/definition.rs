// Definition formatter
//
// Raw dictionary entries arrive as one line:
//
//   headword [| alt | ...] [(qual)|[qual] ...] pos [(qual)|[qual] ...] 1 sense • sub 2 sense ...
//
// `Definition::parse` splits that line into its sections and `Display`
// renders it as an indented block:
//
//   headword
//    | alt |
//    pos
//   	1. sense
//   		• sub
//   	2. sense

use std::fmt;

use regex::Regex;
use tracing::debug;

/// Part-of-speech keywords a definition header may use.
const PART_OF_SPEECH_KEYWORDS: &str =
    "noun|verb|adjective|adverb|pronoun|determiner|particle|preposition|number|conjunction|interjection|classifier|idiom";

/// One or more `(...)` / `[...]` qualifier groups, each followed by whitespace.
const QUALIFIERS: &str = r"(?:(?:(?:\(.+?\)\s)|(?:\[.+?\]\s))+)?";

const BULLET: &str = " • ";
const RENDERED_BULLET: &str = "\n\t\t• ";

/// A dictionary entry split into its sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// The headword as written in the entry.
    pub headword: String,
    /// Pronunciation, alternate forms and qualifiers between the headword
    /// and the part of speech, trimmed. `None` when there are none.
    pub word_info: Option<String>,
    /// The part-of-speech keyword with any qualifiers that follow it, trimmed.
    pub part_of_speech: String,
    /// The senses in order, as written (`"1 a statement ..."`). An entry
    /// without numbered senses has a single unnumbered sense.
    pub senses: Vec<String>,
}

impl Definition {
    /// Parse the raw entry `raw` for `word`.
    ///
    /// Returns `None` unless the entry starts with `word` (ignoring case),
    /// names one of the known parts of speech, and has text after it.
    pub fn parse(word: &str, raw: &str) -> Option<Definition> {
        let header = header_pattern(word)?;
        let caps = header.captures(raw)?;
        let headword = caps.name("word")?.as_str();
        let word_info = caps
            .name("info")
            .map(|m| m.as_str().trim())
            .filter(|info| !info.is_empty());
        let pos = caps.name("pos")?;

        let section = &raw[pos.end()..];
        let mut senses: Vec<String> = split_senses(section).into_iter().map(str::to_string).collect();
        if senses.is_empty() {
            senses.push(section.trim().to_string());
        }

        Some(Definition {
            headword: headword.to_string(),
            word_info: word_info.map(str::to_string),
            part_of_speech: pos.as_str().trim().to_string(),
            senses,
        })
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headword)?;
        if let Some(info) = &self.word_info {
            writeln!(f, " {info}")?;
        }
        writeln!(f, " {}", self.part_of_speech)?;
        for (i, sense) in self.senses.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let expanded = sense.replace(BULLET, RENDERED_BULLET);
            // leading sense number becomes `N.`
            let (number, rest) = expanded.split_at(digit_run(&expanded));
            if number.is_empty() {
                write!(f, "\t{rest}")?;
            } else {
                write!(f, "\t{number}.{rest}")?;
            }
        }
        Ok(())
    }
}

/// Parse and render `raw` as the definition of `word`.
pub fn format_definition(word: &str, raw: &str) -> Option<String> {
    Definition::parse(word, raw).map(|d| d.to_string())
}

/// The header pattern for one headword.
///
/// Built per word because the headword is part of the pattern.
fn header_pattern(word: &str) -> Option<Regex> {
    let pattern = format!(
        r"^(?i)(?P<word>{word})\s(?P<info>(?:(?:\|\s(?:.+?\s\|\s)+)?){QUALIFIERS})?(?P<pos>(?:{PART_OF_SPEECH_KEYWORDS})\s{QUALIFIERS}).+",
        word = regex::escape(word),
    );
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            debug!(word, %err, "definition header pattern rejected");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Sense splitting
// ---------------------------------------------------------------------------

/// Split a sense section into numbered senses.
///
/// A sense starts at a digit run that begins the section or follows
/// whitespace, and that is itself followed by whitespace and at least one
/// more character. It runs up to the next `whitespace digits whitespace`
/// boundary or the end of the section.
fn split_senses(section: &str) -> Vec<&str> {
    let mut senses = Vec::new();
    let mut from = 0;
    while let Some((start, body)) = next_sense_start(section, from) {
        let end = sense_end(section, body);
        senses.push(&section[start..end]);
        from = end;
    }
    senses
}

/// Byte offset of the next sense at or after `from`, and where its text
/// (after the number and one whitespace character) begins.
fn next_sense_start(section: &str, from: usize) -> Option<(usize, usize)> {
    let mut prev: Option<char> = section[..from].chars().next_back();
    for (i, c) in section[from..].char_indices() {
        let at = from + i;
        if c.is_ascii_digit() && prev.is_none_or(char::is_whitespace) {
            let digits_end = at + digit_run(&section[at..]);
            let mut rest = section[digits_end..].chars();
            if let (Some(ws), Some(_)) = (rest.next(), rest.next()) {
                if ws.is_whitespace() {
                    return Some((at, digits_end + ws.len_utf8()));
                }
            }
        }
        prev = Some(c);
    }
    None
}

/// End of the sense whose text begins at `body`: the first boundary after
/// at least one character, or the end of the section.
fn sense_end(section: &str, body: usize) -> usize {
    let mut chars = section[body..].char_indices();
    // the sense holds at least one character
    chars.next();
    for (i, c) in chars {
        let at = body + i;
        if c.is_whitespace() && is_number_boundary(&section[at + c.len_utf8()..]) {
            return at;
        }
    }
    section.len()
}

/// Whether `rest` starts with `digits whitespace`.
fn is_number_boundary(rest: &str) -> bool {
    let digits = digit_run(rest);
    digits > 0 && rest[digits..].chars().next().is_some_and(char::is_whitespace)
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
