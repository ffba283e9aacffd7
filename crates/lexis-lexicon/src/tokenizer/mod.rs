// Rule-based word tokenizer
//
// Works on a `char` buffer for random access and converts character
// positions back to byte offsets when producing `Token`s.

use lexis_core::character::{get_char_type, is_apostrophe, is_hyphen, is_upper, CharType};
use lexis_core::{Token, TokenType, TokenizeOptions};

/// Known multi-word names, used to join runs of capitalized words.
#[derive(Clone, Copy)]
pub struct NameLookup<'a> {
    /// Whether the joined run is a known name.
    pub is_name: &'a dyn Fn(&str) -> bool,
    /// Longest known name, in words. Runs longer than this are not tried.
    pub max_words: usize,
}

// ============================================================================
// URL / email detection
// ============================================================================

fn is_email_symbol(c: char) -> bool {
    matches!(c, '#' | '$' | '%' | '*' | '+' | '=' | '^' | '_' | '`' | '|' | '~')
}

fn is_email_punctuation(c: char) -> bool {
    matches!(c, '!' | '&' | '\'' | '-' | '/' | '?' | '{' | '}' | '.')
}

fn is_url_symbol(c: char) -> bool {
    matches!(c, '=' | '#' | '%' | '_' | '~' | '+')
}

/// Length of a URL or e-mail address at the start of `text`, or 0.
fn find_url_or_email(text: &[char]) -> usize {
    let textlen = text.len();
    let is_http = textlen >= 12 && starts_with_chars(text, "http://");
    let is_https = textlen >= 12 && starts_with_chars(text, "https://");
    if !is_http && !is_https {
        return find_email(text);
    }

    let start = if is_https { 8 } else { 7 };
    for i in start..textlen {
        match get_char_type(text[i]) {
            CharType::Whitespace => return i,
            CharType::Unknown => {
                if !is_url_symbol(text[i]) {
                    return i;
                }
            }
            CharType::Digit | CharType::Letter => {}
            CharType::Punctuation => {
                // Sentence punctuation right before whitespace or end of text
                // is not part of the URL.
                if matches!(text[i], '.' | ',' | '!' | '?' | ')')
                    && (i + 1 == textlen || get_char_type(text[i + 1]) == CharType::Whitespace)
                {
                    return i;
                }
            }
        }
    }
    textlen
}

fn find_email(text: &[char]) -> usize {
    let textlen = text.len();
    if textlen < 6 {
        return 0;
    }

    let mut found_at = false;
    let mut found_dot = false;
    let complete = |found_at: bool, found_dot: bool, i: usize| if found_at && found_dot { i } else { 0 };

    for i in 0..textlen {
        let c = text[i];
        match get_char_type(c) {
            CharType::Whitespace => return complete(found_at, found_dot, i),
            CharType::Unknown => {
                if c == '@' {
                    if found_at || i == 0 {
                        return 0;
                    }
                    found_at = true;
                } else if !is_email_symbol(c) {
                    return complete(found_at, found_dot, i);
                }
            }
            CharType::Digit | CharType::Letter => {}
            CharType::Punctuation => {
                if c == '.' && found_at {
                    if i + 1 == textlen || get_char_type(text[i + 1]) == CharType::Whitespace {
                        return complete(found_at, found_dot, i);
                    }
                    found_dot = true;
                } else if !is_email_punctuation(c) {
                    return complete(found_at, found_dot, i);
                }
            }
        }
    }
    complete(found_at, found_dot, textlen)
}

fn starts_with_chars(text: &[char], prefix: &str) -> bool {
    let mut i = 0;
    for p in prefix.chars() {
        if text.get(i) != Some(&p) {
            return false;
        }
        i += 1;
    }
    true
}

// ============================================================================
// Word length
// ============================================================================

/// Length in characters of the word token at the start of `text`.
///
/// `text[0]` must be a letter or digit.
fn word_length(text: &[char], join_contractions: bool) -> usize {
    let url_length = find_url_or_email(text);
    if url_length != 0 {
        return url_length;
    }

    let textlen = text.len();
    let mut wlen = 0;
    let mut processing_number = false;
    let mut seen_letters = false;

    while wlen < textlen {
        let c = text[wlen];
        match get_char_type(c) {
            CharType::Letter => {
                processing_number = false;
                seen_letters = true;
                wlen += 1;
            }
            CharType::Digit => {
                processing_number = true;
                wlen += 1;
            }
            CharType::Whitespace | CharType::Unknown => return wlen,
            CharType::Punctuation => {
                let next = text.get(wlen + 1).map(|&n| get_char_type(n));
                if is_apostrophe(c) {
                    // "don't", "l'homme", "aujourd'hui"
                    if join_contractions && seen_letters && next == Some(CharType::Letter) {
                        wlen += 1;
                    } else {
                        return wlen;
                    }
                } else if is_hyphen(c) {
                    // "well-known", "COVID-19"
                    match next {
                        Some(CharType::Letter | CharType::Digit) => wlen += 1,
                        _ => return wlen,
                    }
                } else if c == '.' {
                    // "e.g" and "3.14" stay together; "abc.1" does not
                    match next {
                        Some(CharType::Letter) if seen_letters => wlen += 1,
                        Some(CharType::Digit) if !seen_letters => wlen += 1,
                        _ => return wlen,
                    }
                } else if c == ',' {
                    // "1,234"
                    if processing_number && next == Some(CharType::Digit) {
                        wlen += 1;
                    } else {
                        return wlen;
                    }
                } else {
                    return wlen;
                }
            }
        }
    }
    textlen
}

// ============================================================================
// Token scanning
// ============================================================================

/// Find the next token at character position `pos`.
///
/// Returns the token type and its length in characters, or `None` at end
/// of text.
pub fn next_token(text: &[char], pos: usize, join_contractions: bool) -> Option<(TokenType, usize)> {
    let slice = text.get(pos..).filter(|s| !s.is_empty())?;

    let token = match get_char_type(slice[0]) {
        CharType::Letter | CharType::Digit => (TokenType::Word, word_length(slice, join_contractions)),
        CharType::Whitespace => {
            let len = slice
                .iter()
                .take_while(|&&c| get_char_type(c) == CharType::Whitespace)
                .count();
            (TokenType::Whitespace, len)
        }
        CharType::Punctuation => {
            if slice.len() >= 3 && slice[..3] == ['.', '.', '.'] {
                (TokenType::Punctuation, 3)
            } else {
                (TokenType::Punctuation, 1)
            }
        }
        CharType::Unknown => (TokenType::Other, 1),
    };
    Some(token)
}

/// A token in character positions, before conversion to byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawToken {
    token_type: TokenType,
    start: usize,
    end: usize,
}

/// Split `text` into tokens.
///
/// When `options.join_names` is set and `names` is given, runs of
/// capitalized words separated by single spaces are joined into one word
/// token if `names` knows the joined text. The longest run wins.
pub fn tokenize(text: &str, options: TokenizeOptions, names: Option<NameLookup<'_>>) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    offsets.push(text.len());

    let mut raw = Vec::new();
    let mut pos = 0;
    while let Some((token_type, len)) = next_token(&chars, pos, options.join_contractions) {
        raw.push(RawToken {
            token_type,
            start: pos,
            end: pos + len,
        });
        pos += len;
    }

    if options.join_names {
        if let Some(names) = names {
            raw = join_names(&raw, &chars, text, &offsets, names);
        }
    }

    raw.into_iter()
        .filter(|t| options.keeps(t.token_type))
        .map(|t| Token::new(t.token_type, offsets[t.start]..offsets[t.end]))
        .collect()
}

fn join_names(
    raw: &[RawToken],
    chars: &[char],
    text: &str,
    offsets: &[usize],
    names: NameLookup<'_>,
) -> Vec<RawToken> {
    let is_capitalized_word = |t: &RawToken| t.token_type == TokenType::Word && is_upper(chars[t.start]);
    let is_single_space = |t: &RawToken| t.token_type == TokenType::Whitespace && t.end - t.start == 1 && chars[t.start] == ' ';

    let mut joined = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let mut best_end = None;
        if is_capitalized_word(&raw[i]) {
            // Candidate runs: word (space word){1..max_words-1}
            let mut j = i;
            let mut words = 1;
            while words < names.max_words
                && j + 2 < raw.len()
                && is_single_space(&raw[j + 1])
                && raw[j + 2].token_type == TokenType::Word
            {
                j += 2;
                words += 1;
                let candidate = &text[offsets[raw[i].start]..offsets[raw[j].end]];
                if (names.is_name)(candidate) {
                    best_end = Some(j);
                }
            }
        }
        match best_end {
            Some(j) => {
                joined.push(RawToken {
                    token_type: TokenType::Word,
                    start: raw[i].start,
                    end: raw[j].end,
                });
                i = j + 1;
            }
            None => {
                joined.push(raw[i]);
                i += 1;
            }
        }
    }
    joined
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_all(s: &str) -> Vec<(TokenType, String)> {
        tokenize(s, TokenizeOptions::ALL_TOKENS, None)
            .into_iter()
            .map(|t| (t.token_type, s[t.span].to_string()))
            .collect()
    }

    fn words(s: &str, options: TokenizeOptions, is_name: Option<&dyn Fn(&str) -> bool>) -> Vec<String> {
        let names = is_name.map(|is_name| NameLookup { is_name, max_words: 4 });
        tokenize(s, options, names)
            .into_iter()
            .map(|t| s[t.span].to_string())
            .collect()
    }

    fn default_words(s: &str) -> Vec<String> {
        words(s, TokenizeOptions::default(), None)
    }

    #[test]
    fn empty_text() {
        assert!(tokenize_all("").is_empty());
        assert!(default_words("   ").is_empty());
    }

    #[test]
    fn simple_sentence() {
        assert_eq!(default_words("The quick fox."), vec!["The", "quick", "fox"]);
    }

    #[test]
    fn all_tokens_are_reported_in_order() {
        let tokens = tokenize_all("Hi, you!");
        assert_eq!(
            tokens,
            vec![
                (TokenType::Word, "Hi".to_string()),
                (TokenType::Punctuation, ",".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Word, "you".to_string()),
                (TokenType::Punctuation, "!".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_runs_are_one_token() {
        let tokens = tokenize_all("a \t\n b");
        assert_eq!(tokens[1], (TokenType::Whitespace, " \t\n ".to_string()));
    }

    #[test]
    fn contractions_join_when_requested() {
        assert_eq!(default_words("don't stop"), vec!["don't", "stop"]);
        assert_eq!(default_words("l\u{2019}homme"), vec!["l\u{2019}homme"]);
        let split = TokenizeOptions {
            join_contractions: false,
            ..TokenizeOptions::default()
        };
        assert_eq!(words("don't", split, None), vec!["don", "t"]);
    }

    #[test]
    fn trailing_apostrophe_is_not_part_of_word() {
        assert_eq!(default_words("dogs' bowls"), vec!["dogs", "bowls"]);
    }

    #[test]
    fn hyphenated_compounds() {
        assert_eq!(default_words("a well-known fact"), vec!["a", "well-known", "fact"]);
        assert_eq!(default_words("COVID-19"), vec!["COVID-19"]);
        assert_eq!(default_words("pre- and post-war"), vec!["pre", "and", "post-war"]);
    }

    #[test]
    fn numbers_with_separators() {
        assert_eq!(default_words("1,234 and 3.14"), vec!["1,234", "and", "3.14"]);
        assert_eq!(default_words("item 5, next"), vec!["item", "5", "next"]);
        assert_eq!(default_words("abc.1"), vec!["abc", "1"]);
    }

    #[test]
    fn abbreviations_with_inner_dots() {
        assert_eq!(default_words("e.g. this"), vec!["e.g", "this"]);
    }

    #[test]
    fn urls_and_emails_are_single_words() {
        assert_eq!(
            default_words("see https://example.com/a?b=c. Then"),
            vec!["see", "https://example.com/a?b=c", "Then"]
        );
        assert_eq!(
            default_words("mail alice@example.org now"),
            vec!["mail", "alice@example.org", "now"]
        );
    }

    #[test]
    fn not_an_email() {
        assert_eq!(default_words("a@b"), vec!["a", "b"]);
    }

    #[test]
    fn ellipsis_is_one_punctuation_token() {
        let tokens = tokenize_all("wait...");
        assert_eq!(tokens[1], (TokenType::Punctuation, "...".to_string()));
        let tokens = tokenize_all("wait..");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn symbols_are_other_tokens() {
        let tokens = tokenize_all("#1");
        assert_eq!(tokens[0], (TokenType::Other, "#".to_string()));
        assert!(default_words("\u{1F600}").is_empty());
    }

    #[test]
    fn byte_offsets_for_multibyte_text() {
        let text = "été à Paris";
        let tokens = tokenize(text, TokenizeOptions::default(), None);
        assert_eq!(tokens[0].span, 0..5);
        assert_eq!(&text[tokens[1].span.clone()], "à");
        assert_eq!(&text[tokens[2].span.clone()], "Paris");
    }

    #[test]
    fn non_latin_words() {
        assert_eq!(default_words("שלום עולם"), vec!["שלום", "עולם"]);
        assert_eq!(default_words("नमस्ते दुनिया"), vec!["नमस्ते", "दुनिया"]);
    }

    #[test]
    fn names_join_when_known() {
        let is_name = |s: &str| s == "New York" || s == "New York City";
        assert_eq!(
            words("I love New York City today", TokenizeOptions::default(), Some(&is_name)),
            vec!["I", "love", "New York City", "today"]
        );
        assert_eq!(
            words("New York.", TokenizeOptions::default(), Some(&is_name)),
            vec!["New York"]
        );
    }

    #[test]
    fn names_need_single_spaces_and_the_option() {
        let is_name = |s: &str| s == "New York";
        assert_eq!(
            words("New  York", TokenizeOptions::default(), Some(&is_name)),
            vec!["New", "York"]
        );
        let no_names = TokenizeOptions {
            join_names: false,
            ..TokenizeOptions::default()
        };
        assert_eq!(words("New York", no_names, Some(&is_name)), vec!["New", "York"]);
    }

    #[test]
    fn name_length_is_bounded_by_the_lookup() {
        let is_name = |s: &str| s == "Royal Academy of Dramatic Art";
        let text = "at the Royal Academy of Dramatic Art";
        let joined = |max_words| -> Vec<&str> {
            let names = NameLookup { is_name: &is_name, max_words };
            tokenize(text, TokenizeOptions::default(), Some(names))
                .into_iter()
                .map(|t| &text[t.span])
                .collect()
        };
        assert_eq!(joined(5), vec!["at", "the", "Royal Academy of Dramatic Art"]);
        assert_eq!(joined(4).len(), 7);
    }

    #[test]
    fn lowercase_runs_are_not_names() {
        let is_name = |_: &str| true;
        assert_eq!(
            words("new york", TokenizeOptions::default(), Some(&is_name)),
            vec!["new", "york"]
        );
    }

    #[test]
    fn next_token_at_end() {
        let chars: Vec<char> = "ab".chars().collect();
        assert_eq!(next_token(&chars, 2, true), None);
        assert_eq!(next_token(&chars, 5, true), None);
        assert_eq!(next_token(&chars, 0, true), Some((TokenType::Word, 2)));
    }
}
