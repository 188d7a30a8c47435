//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::rules::{object_alias, RuleSet};

/// Shape of a single trimmed input line, decided from its tokens before any
/// substitution takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    ClassDecl,
    /// Holds the typedef'd name when the line has exactly three tokens.
    TypedefDecl(Option<&'a str>),
    /// First token is `//`.
    CommentLine,
    /// First token is `/**`.
    BlockCommentOpen,
    /// Second token is `//`.
    InlineCommentLine,
    /// Starts with `*`, the body of a block comment. The leading space is
    /// added based on the substituted text.
    ContinuationLine,
    Ordinary,
}

impl<'a> LineKind<'a> {
    /// `line` must already be trimmed.
    pub fn classify(line: &'a str) -> LineKind<'a> {
        let toks: Vec<&str> = line.split(is_space).filter(|t| !t.is_empty()).collect();

        match toks.as_slice() {
            [] => LineKind::Blank,
            ["class", ..] => LineKind::ClassDecl,
            ["typedef", _, name] => LineKind::TypedefDecl(Some(*name)),
            ["typedef", ..] => LineKind::TypedefDecl(None),
            ["//", ..] => LineKind::CommentLine,
            ["/**", ..] => LineKind::BlockCommentOpen,
            [_, "//", ..] => LineKind::InlineCommentLine,
            _ if line.starts_with('*') => LineKind::ContinuationLine,
            _ => LineKind::Ordinary,
        }
    }
}

/// ASCII whitespace including vertical tab; non-ASCII spaces such as NBSP
/// are ordinary characters.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Output produced by one input line: zero or more lines, without their
/// terminating newlines. A substituted line may itself contain newlines.
pub type Translation = Vec<String>;

/// Runs one raw input line through the whole pipeline.
pub fn translate_line(rules: &RuleSet, raw: &str) -> Translation {
    let line = raw.trim_matches(is_space);
    let kind = LineKind::classify(line);
    log::trace!("{kind:?}: {line}");

    match kind {
        LineKind::Blank | LineKind::ClassDecl | LineKind::TypedefDecl(None) => Vec::new(),
        LineKind::TypedefDecl(Some(name)) => vec![format!("typedef void* {}", object_alias(name))],
        _ => {
            let text = rules.apply(line);
            if rules.is_removed(&text) {
                log::debug!("dropping line: {text}");
                return Vec::new();
            }
            emit(kind, text)
        }
    }
}

fn emit(kind: LineKind<'_>, text: String) -> Translation {
    match kind {
        LineKind::CommentLine => vec![String::new()],
        LineKind::BlockCommentOpen => vec![String::new(), text],
        LineKind::InlineCommentLine => vec![text],
        _ if text.starts_with('*') => vec![format!(" {text}")],
        _ => vec![text],
    }
}
