// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Letter-case classification used by the `*-case` rules.

use std::fmt;
use std::str::FromStr;

/// A named letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl Case {
    pub const ALL: [Case; 8] = [
        Case::Lower,
        Case::Upper,
        Case::Camel,
        Case::Kebab,
        Case::Pascal,
        Case::Sentence,
        Case::Snake,
        Case::Start,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Case::Lower => "lower-case",
            Case::Upper => "upper-case",
            Case::Camel => "camel-case",
            Case::Kebab => "kebab-case",
            Case::Pascal => "pascal-case",
            Case::Sentence => "sentence-case",
            Case::Snake => "snake-case",
            Case::Start => "start-case",
        }
    }

    /// Whether `input` is already in this case.
    ///
    /// Input without any cased letter (digits, punctuation, empty) is in
    /// every case.
    pub fn matches(self, input: &str) -> bool {
        if !input.chars().any(|c| c.is_lowercase() || c.is_uppercase()) {
            return true;
        }
        self.apply(input) == input
    }

    /// Convert `input` to this case.
    pub fn apply(self, input: &str) -> String {
        match self {
            Case::Lower => input.to_lowercase(),
            Case::Upper => input.to_uppercase(),
            Case::Sentence => upper_first(&input.to_lowercase()),
            Case::Camel => words(input)
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 {
                        w.to_lowercase()
                    } else {
                        upper_first(&w.to_lowercase())
                    }
                })
                .collect(),
            Case::Pascal => words(input)
                .iter()
                .map(|w| upper_first(&w.to_lowercase()))
                .collect(),
            Case::Kebab => join_lower(input, "-"),
            Case::Snake => join_lower(input, "_"),
            Case::Start => words(input)
                .iter()
                .map(|w| upper_first(w))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .iter()
            .copied()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| format!("unknown case '{}'", s))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_lower(input: &str, sep: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Split on non-alphanumerics and on lower-to-upper boundaries.
fn words(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_names() {
        for case in Case::ALL {
            assert_eq!(case.as_str().parse::<Case>(), Ok(case));
        }
        assert!("title-case".parse::<Case>().is_err());
    }

    #[test]
    fn test_lower_and_upper() {
        assert!(Case::Lower.matches("feat"));
        assert!(!Case::Lower.matches("Feat"));
        assert!(Case::Upper.matches("FEAT"));
        assert!(!Case::Upper.matches("FEAt"));
    }

    #[test]
    fn test_sentence_case() {
        assert!(Case::Sentence.matches("Add init command"));
        assert!(!Case::Sentence.matches("add init command"));
        assert!(!Case::Sentence.matches("Add Init command"));
    }

    #[test]
    fn test_start_and_pascal_case() {
        assert!(Case::Start.matches("Add Init Command"));
        assert!(!Case::Start.matches("Add init command"));
        assert!(Case::Pascal.matches("AddInitCommand"));
        assert!(!Case::Pascal.matches("addInitCommand"));
    }

    #[test]
    fn test_camel_kebab_snake() {
        assert!(Case::Camel.matches("addInitCommand"));
        assert!(Case::Kebab.matches("runtime-go"));
        assert!(!Case::Kebab.matches("runtime_go"));
        assert!(Case::Snake.matches("runtime_go"));
    }

    #[test]
    fn test_uncased_input_matches_everything() {
        for case in Case::ALL {
            assert!(case.matches("2.0.1"));
            assert!(case.matches(""));
        }
    }
}
