//! Segment-aware glob matching for workspace-relative paths.
//!
//! A pattern is split on `/` and matched segment by segment:
//!
//! - `**` as a whole segment spans zero or more path segments. When it is the
//!   last segment it needs at least one, so `vendor/**` covers the contents of
//!   `vendor/` but not a file called `vendor`.
//! - `*` matches any run of characters inside a single segment, `?` exactly one
//!   character, and `[a-z]` / `[!a-z]` a character class.
//!
//! Patterns without `**` therefore only match at the depth they spell out:
//! `*.generated.php` matches `a.generated.php` but not `src/a.generated.php`.

use std::fmt;

/// A compiled ignore pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glob {
    pattern: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    AnyDepth,
    Name(Vec<Token>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    Star,
    Class { negated: bool, items: Vec<ClassItem> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
}

impl Glob {
    /// Compiles `pattern`. Never fails: constructs that do not parse (such as
    /// an unterminated `[`) are taken literally.
    pub fn new(pattern: &str) -> Self {
        let normalized = pattern.replace('\\', "/");
        let mut trimmed = normalized.as_str();
        loop {
            if let Some(rest) = trimmed.strip_prefix("./") {
                trimmed = rest;
            } else if let Some(rest) = trimmed.strip_prefix('/') {
                trimmed = rest;
            } else {
                break;
            }
        }

        let mut segments = Vec::new();
        for part in trimmed.split('/') {
            match part {
                "" | "." => {}
                "**" => {
                    if segments.last() != Some(&Segment::AnyDepth) {
                        segments.push(Segment::AnyDepth);
                    }
                }
                _ => segments.push(Segment::Name(parse_tokens(part))),
            }
        }

        Self {
            pattern: pattern.to_string(),
            segments,
        }
    }

    /// The pattern as it was written.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether the `/`-separated, workspace-relative `path` matches.
    pub fn is_match(&self, path: &str) -> bool {
        if self.segments.is_empty() {
            return false;
        }

        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        match_segments(&self.segments, &parts)
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Whether `pattern` covers exactly `path`.
///
/// Filled in from the last pattern segment backwards: `next[j]` says whether
/// the remaining pattern matches `path[j..]`, so every (segment, position)
/// pair is decided once and `**` runs cost `O(pattern * path)`.
fn match_segments(pattern: &[Segment], path: &[&str]) -> bool {
    let n = path.len();
    let mut next: Vec<bool> = (0..=n).map(|j| j == n).collect();
    let mut current = vec![false; n + 1];

    for (i, segment) in pattern.iter().enumerate().rev() {
        let trailing = i + 1 == pattern.len();
        match segment {
            Segment::AnyDepth if trailing => {
                for (j, slot) in current.iter_mut().enumerate() {
                    *slot = j < n;
                }
            }
            Segment::AnyDepth => {
                current[n] = next[n];
                for j in (0..n).rev() {
                    current[j] = next[j] || current[j + 1];
                }
            }
            Segment::Name(tokens) => {
                current[n] = false;
                for (j, name) in path.iter().enumerate() {
                    current[j] = next[j + 1] && match_name(tokens, name);
                }
            }
        }
        std::mem::swap(&mut next, &mut current);
    }

    next[0]
}

/// Wildcard match of a single segment, backtracking to the most recent `*`.
fn match_name(tokens: &[Token], name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    let (mut t, mut c) = (0, 0);
    let mut last_star: Option<(usize, usize)> = None;

    while c < chars.len() {
        match tokens.get(t) {
            Some(Token::Star) => {
                last_star = Some((t, c));
                t += 1;
                continue;
            }
            Some(token) if token.matches(chars[c]) => {
                t += 1;
                c += 1;
                continue;
            }
            _ => {}
        }

        let Some((star_t, star_c)) = last_star else {
            return false;
        };
        t = star_t + 1;
        c = star_c + 1;
        last_star = Some((star_t, c));
    }

    tokens[t..].iter().all(|token| *token == Token::Star)
}

impl Token {
    fn matches(&self, ch: char) -> bool {
        match self {
            Token::Literal(lit) => *lit == ch,
            Token::AnyChar => true,
            Token::Star => false,
            Token::Class { negated, items } => items.iter().any(|item| item.contains(ch)) != *negated,
        }
    }
}

impl ClassItem {
    fn contains(&self, ch: char) -> bool {
        match self {
            ClassItem::Char(c) => *c == ch,
            ClassItem::Range(lo, hi) => (*lo..=*hi).contains(&ch),
        }
    }
}

fn parse_tokens(segment: &str) -> Vec<Token> {
    let chars: Vec<char> = segment.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                // `**` inside a longer segment is just `*`
                if tokens.last() != Some(&Token::Star) {
                    tokens.push(Token::Star);
                }
                i += 1;
            }
            '?' => {
                tokens.push(Token::AnyChar);
                i += 1;
            }
            '[' => {
                if let Some((class, consumed)) = parse_class(&chars[i + 1..]) {
                    tokens.push(class);
                    i += 1 + consumed;
                } else {
                    tokens.push(Token::Literal('['));
                    i += 1;
                }
            }
            ch => {
                tokens.push(Token::Literal(ch));
                i += 1;
            }
        }
    }

    tokens
}

/// Parses the body of a `[...]` class. `chars` starts right after the `[`;
/// the returned count includes the closing `]`.
fn parse_class(chars: &[char]) -> Option<(Token, usize)> {
    let negated = matches!(chars.first(), Some('!' | '^'));
    let start = usize::from(negated);
    let mut items = Vec::new();
    let mut i = start;

    while i < chars.len() {
        let ch = chars[i];
        // a `]` right after the opening bracket is a member, not the end
        if ch == ']' && i > start {
            return Some((Token::Class { negated, items }, i + 1));
        }
        if i + 2 < chars.len() && chars[i + 1] == '-' && chars[i + 2] != ']' {
            items.push(ClassItem::Range(ch, chars[i + 2]));
            i += 3;
        } else {
            items.push(ClassItem::Char(ch));
            i += 1;
        }
    }

    None
}
