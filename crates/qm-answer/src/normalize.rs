//! Type-aware canonicalization of answer text.
//!
//! Both the user's answer and the reference answer go through the same
//! normalization before any comparison, so that casing, punctuation,
//! articles, honorifics, abbreviations and spelled-out numbers do not decide
//! whether an answer is accepted. Every function here is pure and total.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::AnswerType;

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.,!?;:'"()\-]"#).expect("punctuation pattern is valid")
});

/// Leading articles, checked in this order, at most one stripped.
const ARTICLES: &[&str] = &["the ", "a ", "an "];

const PERSON_TITLES: &[&str] = &[
    "professor", "reverend", "prof", "dame", "lord", "lady", "miss", "mrs", "sir", "rev", "dr",
    "mr", "ms",
];

/// Full month names come before abbreviations so "march" is never left as "3ch".
const MONTHS: &[(&str, &str)] = &[
    ("january", "1"),
    ("february", "2"),
    ("march", "3"),
    ("april", "4"),
    ("may", "5"),
    ("june", "6"),
    ("july", "7"),
    ("august", "8"),
    ("september", "9"),
    ("october", "10"),
    ("november", "11"),
    ("december", "12"),
    ("sept", "9"),
    ("jan", "1"),
    ("feb", "2"),
    ("mar", "3"),
    ("apr", "4"),
    ("jun", "6"),
    ("jul", "7"),
    ("aug", "8"),
    ("sep", "9"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

/// Normalize `text` for comparison under the rules of `answer_type`.
///
/// Never fails: empty or punctuation-only input yields an empty string,
/// which the validator treats as "no match".
pub fn normalize(text: &str, answer_type: AnswerType) -> String {
    match answer_type {
        AnswerType::Text => base(text),
        AnswerType::Person => normalize_person(text),
        AnswerType::Place => normalize_place(text),
        AnswerType::Number => normalize_number(text),
        AnswerType::Date => normalize_date(text),
        AnswerType::Title => normalize_title(text),
        AnswerType::Scientific => normalize_scientific(text),
        AnswerType::MultipleChoice => normalize_multiple_choice(text),
    }
}

/// Lowercase, strip punctuation, collapse whitespace, drop one leading
/// article, trim.
fn base(text: &str) -> String {
    let collapsed = PUNCTUATION
        .replace_all(&text.to_lowercase(), "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    strip_article(&collapsed).trim().to_string()
}

fn strip_article(text: &str) -> &str {
    ARTICLES
        .iter()
        .find_map(|article| text.strip_prefix(article))
        .unwrap_or(text)
}

fn normalize_person(text: &str) -> String {
    let untitled = strip_person_title(text);

    // "Last, First" must be detected while the comma is still there
    let mut parts = untitled.split(',');
    let reordered = match (parts.next(), parts.next(), parts.next()) {
        (Some(last), Some(first), None) if !last.trim().is_empty() && !first.trim().is_empty() => {
            format!("{} {}", first.trim(), last.trim())
        }
        _ => untitled.to_string(),
    };

    base(&reordered)
}

/// Drop a leading honorific ("Dr.", "Prof", "Sir", ...) from the raw text.
///
/// The title has to stand on its own: "Drake" keeps its "Dr".
fn strip_person_title(text: &str) -> &str {
    let trimmed = text.trim_start();

    for title in PERSON_TITLES {
        let Some(prefix) = trimmed.as_bytes().get(..title.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(title.as_bytes()) {
            continue;
        }

        let rest = &trimmed[title.len()..];
        let (rest, had_period) = match rest.strip_prefix('.') {
            Some(after) => (after, true),
            None => (rest, false),
        };
        if rest.starts_with(char::is_whitespace) || (had_period && !rest.is_empty()) {
            return rest.trim_start();
        }
    }

    trimmed
}

fn normalize_place(text: &str) -> String {
    let normalized = base(text);
    match expand_place_abbreviation(&normalized) {
        Some(expanded) => expanded.to_string(),
        None => normalized,
    }
}

fn expand_place_abbreviation(place: &str) -> Option<&'static str> {
    let expanded = match place {
        "usa" => "united states of america",
        "us" => "united states",
        "uk" => "united kingdom",
        "uae" => "united arab emirates",
        "mt" => "mount",
        "st" => "saint",
        "ft" => "fort",
        "nyc" => "new york city",
        "la" => "los angeles",
        "dc" => "district of columbia",
        _ => return None,
    };
    Some(expanded)
}

fn normalize_number(text: &str) -> String {
    let normalized = base(text);
    match number_word_value(&normalized) {
        Some(digits) => digits.to_string(),
        None => normalized.replace(',', ""),
    }
}

fn number_word_value(word: &str) -> Option<&'static str> {
    let digits = match word {
        "zero" => "0",
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        "ten" => "10",
        "eleven" => "11",
        "twelve" => "12",
        "thirteen" => "13",
        "fourteen" => "14",
        "fifteen" => "15",
        "sixteen" => "16",
        "seventeen" => "17",
        "eighteen" => "18",
        "nineteen" => "19",
        "twenty" => "20",
        "thirty" => "30",
        "forty" => "40",
        "fifty" => "50",
        "sixty" => "60",
        "seventy" => "70",
        "eighty" => "80",
        "ninety" => "90",
        "hundred" => "100",
        "thousand" => "1000",
        "million" => "1000000",
        "billion" => "1000000000",
        _ => return None,
    };
    Some(digits)
}

fn normalize_date(text: &str) -> String {
    MONTHS
        .iter()
        .fold(base(text), |acc, (name, numeral)| acc.replace(name, numeral))
}

fn normalize_title(text: &str) -> String {
    let without_subtitle = text.split(':').next().unwrap_or_default();

    // base() has already taken a leading "the "; a second one belongs to the title
    base(without_subtitle)
}

fn normalize_scientific(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect()
}

fn normalize_multiple_choice(text: &str) -> String {
    text.chars()
        .find(|c| c.is_alphabetic())
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}
