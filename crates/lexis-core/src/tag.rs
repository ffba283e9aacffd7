// Provider tag values and the public tag vocabularies
//
// Provider tags are opaque strings. The closed vocabularies below map to and
// from them through plain `(variant, raw label)` tables; the raw label is
// also the variant's `as_str()` form.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// A tag value reported by a provider for a span of text.
///
/// For the lexical-class and name-type schemes the value is one of the
/// constants below; for the lemma scheme it is the lemma itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    pub const NOUN: Tag = Tag::from_static("Noun");
    pub const VERB: Tag = Tag::from_static("Verb");
    pub const ADJECTIVE: Tag = Tag::from_static("Adjective");
    pub const ADVERB: Tag = Tag::from_static("Adverb");
    pub const PRONOUN: Tag = Tag::from_static("Pronoun");
    pub const DETERMINER: Tag = Tag::from_static("Determiner");
    pub const PARTICLE: Tag = Tag::from_static("Particle");
    pub const PREPOSITION: Tag = Tag::from_static("Preposition");
    pub const NUMBER: Tag = Tag::from_static("Number");
    pub const CONJUNCTION: Tag = Tag::from_static("Conjunction");
    pub const INTERJECTION: Tag = Tag::from_static("Interjection");
    pub const CLASSIFIER: Tag = Tag::from_static("Classifier");
    pub const IDIOM: Tag = Tag::from_static("Idiom");
    pub const OTHER_WORD: Tag = Tag::from_static("OtherWord");

    pub const PERSONAL_NAME: Tag = Tag::from_static("PersonalName");
    pub const ORGANIZATION_NAME: Tag = Tag::from_static("OrganizationName");
    pub const PLACE_NAME: Tag = Tag::from_static("PlaceName");

    pub const fn from_static(value: &'static str) -> Self {
        Tag(Cow::Borrowed(value))
    }

    pub fn new(value: impl Into<String>) -> Self {
        Tag(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// PartOfSpeech
// ---------------------------------------------------------------------------

/// Lexical class of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Particle,
    Preposition,
    Number,
    Conjunction,
    Interjection,
    Classifier,
    Idiom,
    OtherWord,
}

static PART_OF_SPEECH_TAGS: [(PartOfSpeech, Tag); 14] = [
    (PartOfSpeech::Noun, Tag::NOUN),
    (PartOfSpeech::Verb, Tag::VERB),
    (PartOfSpeech::Adjective, Tag::ADJECTIVE),
    (PartOfSpeech::Adverb, Tag::ADVERB),
    (PartOfSpeech::Pronoun, Tag::PRONOUN),
    (PartOfSpeech::Determiner, Tag::DETERMINER),
    (PartOfSpeech::Particle, Tag::PARTICLE),
    (PartOfSpeech::Preposition, Tag::PREPOSITION),
    (PartOfSpeech::Number, Tag::NUMBER),
    (PartOfSpeech::Conjunction, Tag::CONJUNCTION),
    (PartOfSpeech::Interjection, Tag::INTERJECTION),
    (PartOfSpeech::Classifier, Tag::CLASSIFIER),
    (PartOfSpeech::Idiom, Tag::IDIOM),
    (PartOfSpeech::OtherWord, Tag::OTHER_WORD),
];

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 14] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Determiner,
        PartOfSpeech::Particle,
        PartOfSpeech::Preposition,
        PartOfSpeech::Number,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Interjection,
        PartOfSpeech::Classifier,
        PartOfSpeech::Idiom,
        PartOfSpeech::OtherWord,
    ];

    /// Raw label, identical to the provider tag value.
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Determiner => "Determiner",
            PartOfSpeech::Particle => "Particle",
            PartOfSpeech::Preposition => "Preposition",
            PartOfSpeech::Number => "Number",
            PartOfSpeech::Conjunction => "Conjunction",
            PartOfSpeech::Interjection => "Interjection",
            PartOfSpeech::Classifier => "Classifier",
            PartOfSpeech::Idiom => "Idiom",
            PartOfSpeech::OtherWord => "OtherWord",
        }
    }

    /// Human-readable label: "Other Word" for `OtherWord`, the raw label
    /// otherwise.
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::OtherWord => "Other Word",
            other => other.as_str(),
        }
    }

    pub fn tag(self) -> Tag {
        lookup_tag(&PART_OF_SPEECH_TAGS, self)
    }

    pub fn from_tag(tag: &Tag) -> Option<Self> {
        lookup_variant(&PART_OF_SPEECH_TAGS, tag)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// NameType
// ---------------------------------------------------------------------------

/// Named-entity class of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameType {
    PersonalName,
    OrganizationName,
    PlaceName,
}

static NAME_TYPE_TAGS: [(NameType, Tag); 3] = [
    (NameType::PersonalName, Tag::PERSONAL_NAME),
    (NameType::OrganizationName, Tag::ORGANIZATION_NAME),
    (NameType::PlaceName, Tag::PLACE_NAME),
];

impl NameType {
    pub const ALL: [NameType; 3] = [
        NameType::PersonalName,
        NameType::OrganizationName,
        NameType::PlaceName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NameType::PersonalName => "PersonalName",
            NameType::OrganizationName => "OrganizationName",
            NameType::PlaceName => "PlaceName",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NameType::PersonalName => "Personal Name",
            NameType::OrganizationName => "Organization Name",
            NameType::PlaceName => "Place Name",
        }
    }

    pub fn tag(self) -> Tag {
        lookup_tag(&NAME_TYPE_TAGS, self)
    }

    pub fn from_tag(tag: &Tag) -> Option<Self> {
        lookup_variant(&NAME_TYPE_TAGS, tag)
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// NameTypeOrPartOfSpeech
// ---------------------------------------------------------------------------

/// Name class when the word is part of a name, lexical class otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameTypeOrPartOfSpeech {
    NameType(NameType),
    PartOfSpeech(PartOfSpeech),
}

impl NameTypeOrPartOfSpeech {
    /// Every case: the 14 lexical classes followed by the 3 name classes.
    pub const ALL: [NameTypeOrPartOfSpeech; 17] = {
        let mut all = [NameTypeOrPartOfSpeech::NameType(NameType::PersonalName); 17];
        let mut i = 0;
        while i < PartOfSpeech::ALL.len() {
            all[i] = NameTypeOrPartOfSpeech::PartOfSpeech(PartOfSpeech::ALL[i]);
            i += 1;
        }
        let mut j = 0;
        while j < NameType::ALL.len() {
            all[i + j] = NameTypeOrPartOfSpeech::NameType(NameType::ALL[j]);
            j += 1;
        }
        all
    };

    pub fn as_str(self) -> &'static str {
        match self {
            NameTypeOrPartOfSpeech::NameType(n) => n.as_str(),
            NameTypeOrPartOfSpeech::PartOfSpeech(p) => p.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NameTypeOrPartOfSpeech::NameType(n) => n.label(),
            NameTypeOrPartOfSpeech::PartOfSpeech(p) => p.label(),
        }
    }

    pub fn tag(self) -> Tag {
        match self {
            NameTypeOrPartOfSpeech::NameType(n) => n.tag(),
            NameTypeOrPartOfSpeech::PartOfSpeech(p) => p.tag(),
        }
    }

    /// Name classes are tried first; the two vocabularies are disjoint.
    pub fn from_tag(tag: &Tag) -> Option<Self> {
        NameType::from_tag(tag)
            .map(NameTypeOrPartOfSpeech::NameType)
            .or_else(|| PartOfSpeech::from_tag(tag).map(NameTypeOrPartOfSpeech::PartOfSpeech))
    }
}

impl From<NameType> for NameTypeOrPartOfSpeech {
    fn from(value: NameType) -> Self {
        NameTypeOrPartOfSpeech::NameType(value)
    }
}

impl From<PartOfSpeech> for NameTypeOrPartOfSpeech {
    fn from(value: PartOfSpeech) -> Self {
        NameTypeOrPartOfSpeech::PartOfSpeech(value)
    }
}

impl fmt::Display for NameTypeOrPartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Table lookup
// ---------------------------------------------------------------------------

fn lookup_tag<T: Copy + PartialEq>(table: &[(T, Tag)], variant: T) -> Tag {
    table
        .iter()
        .find(|(v, _)| *v == variant)
        .map(|(_, tag)| tag.clone())
        .unwrap_or_else(|| Tag::OTHER_WORD)
}

fn lookup_variant<T: Copy>(table: &[(T, Tag)], tag: &Tag) -> Option<T> {
    table.iter().find(|(_, t)| t == tag).map(|(v, _)| *v)
}
