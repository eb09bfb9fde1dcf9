// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and header parsing.
//!
//! Parsing never fails. Anything that does not look like a conventional
//! header comes back with the corresponding fields absent, and it is up to
//! the rules to decide what a missing field means.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Prefix of a conventional header, up to and including the colon.
    static ref HEADER_PREFIX_REGEX: Regex =
        Regex::new(r"^(?P<type>[^(!:]*)(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?:").unwrap();

    /// Breaking change footer token.
    static ref BREAKING_FOOTER_REGEX: Regex =
        Regex::new(r"(?m)^BREAKING[ -]CHANGE: ").unwrap();
}

/// A parsed commit message.
///
/// Only the header (first line) is split into fields. The body is only
/// scanned for a breaking change footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    header: String,
    commit_type: Option<String>,
    scope: Option<String>,
    subject: Option<String>,
    breaking_marker: bool,
    breaking_footer: bool,
}

impl CommitMessage {
    /// Parse a commit message. Always succeeds.
    pub fn parse(text: &str) -> Self {
        let header = first_line(text);

        let (commit_type, scope, breaking_marker) = match HEADER_PREFIX_REGEX.captures(header) {
            Some(captures) => {
                let commit_type = captures
                    .name("type")
                    .map(|m| m.as_str())
                    .filter(|t| !t.is_empty())
                    .map(str::to_string);
                let scope = captures.name("scope").map(|m| m.as_str().to_string());
                (commit_type, scope, captures.name("breaking").is_some())
            }
            None => (None, None, false),
        };

        let subject = header
            .find(": ")
            .map(|idx| header[idx + 2..].trim().to_string());

        let breaking_footer = text
            .split_once('\n')
            .map(|(_, rest)| BREAKING_FOOTER_REGEX.is_match(rest))
            .unwrap_or(false);

        Self {
            header: header.to_string(),
            commit_type,
            scope,
            subject,
            breaking_marker,
            breaking_footer,
        }
    }

    /// The first line, untrimmed.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }

    /// Commit type, if the header is conventional.
    pub fn commit_type(&self) -> Option<&str> {
        self.commit_type.as_deref()
    }

    /// Scope. `Some("")` for `type(): ...`, `None` when no parentheses.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Subject after the first `": "`, trimmed.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Whether this is a breaking change, marked either by `!` before the
    /// colon or by a `BREAKING CHANGE:` footer.
    pub fn is_breaking(&self) -> bool {
        self.breaking_marker || self.breaking_footer
    }
}

/// Drop `#` comment lines, as git does for `COMMIT_EDITMSG`.
///
/// Everything from a `# ------------------------ >8 ------------------------`
/// scissors line onwards is dropped too.
pub fn strip_comments(text: &str) -> String {
    let mut kept = Vec::new();
    for line in text.lines() {
        if line.starts_with("# ") && line.contains(">8") {
            break;
        }
        if !line.starts_with('#') {
            kept.push(line);
        }
    }
    kept.join("\n").trim_end().to_string()
}

fn first_line(text: &str) -> &str {
    let line = text.split('\n').next().unwrap_or("");
    line.strip_suffix('\r').unwrap_or(line)
}
