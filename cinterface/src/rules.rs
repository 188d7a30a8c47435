//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Substitution tables used to turn the C++ interface header into C.
//!
//! All replacements are plain substring replacements. They are applied in
//! table order and compound: each entry sees the output of the ones before
//! it, so the order below is load-bearing.

/// Prefix given to every object name and every opaque typedef.
const OBJECT_PREFIX: &str = "EPAX_";

/// Entity names rewritten to `EPAX_<lowercase>`, wherever they appear.
const OBJECT_NAMES: &[&str] = &[
    "BIN", "SECT", "FUNC", "CFG", "LOOP", "BBL", "INSN", "SYM", "FLOW",
];

// Order matters. `std::string` runs before the vector rules and leaves
// `std::vector<const char*>&` (or `const const`) behind for later entries
// to finish off.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("namespace EPAX {", "#ifdef __cplusplus\nextern \"C\"\n{\n#endif"),
    ("Interface_hpp", "Interface_h"),
    ("} // namespace EPAX", "#ifdef __cplusplus\n}\n#endif"),
    ("std::vector<EPAX_bbl>&", "EPAX_bbl*"),
    ("std::string", "const char*"),
    ("std::vector<EPAX_insn>&", "EPAX_insn*"),
    ("const const", "const"),
    ("std::vector<const char*>&", "char**"),
    ("std::vector<uint64_t>&", "uint64_t*"),
    ("std::vector<EPAX_func>&", "EPAX_func*"),
    ("bool", "uint32_t"),
    ("Interface.hpp", "Interface.h"),
    ("std::vector<std::string>&", "char**"),
];

const REMOVE_LINES: &[&str] = &["#include <string>", "#include <iostream>", "#include <vector>"];

/// Immutable rule tables, built once and handed to the translator.
#[derive(Debug, Clone)]
pub struct RuleSet {
    objects: Vec<(String, String)>,
    substitutions: Vec<(String, String)>,
    remove: Vec<String>,
}

impl RuleSet {
    /// The tables for the EPAX interface header.
    pub fn epax() -> RuleSet {
        RuleSet::new(OBJECT_NAMES, SUBSTITUTIONS, REMOVE_LINES)
    }

    pub fn new(objects: &[&str], substitutions: &[(&str, &str)], remove: &[&str]) -> RuleSet {
        RuleSet {
            objects: objects
                .iter()
                .map(|name| (name.to_string(), object_alias(name)))
                .collect(),
            substitutions: substitutions
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            remove: remove.iter().map(|line| line.to_string()).collect(),
        }
    }

    /// Rewrites every object name occurrence, including those embedded in
    /// longer identifiers (`BIN_create` becomes `EPAX_bin_create`).
    pub fn rename_objects(&self, line: &str) -> String {
        replace_all(line, &self.objects)
    }

    /// Applies the C++ to C substitutions in table order.
    pub fn substitute(&self, line: &str) -> String {
        replace_all(line, &self.substitutions)
    }

    /// Object renaming followed by the substitution table.
    pub fn apply(&self, line: &str) -> String {
        self.substitute(&self.rename_objects(line))
    }

    pub fn is_removed(&self, line: &str) -> bool {
        self.remove.iter().any(|r| r == line)
    }
}

/// `BIN` -> `EPAX_bin`; also used for typedef names.
pub fn object_alias(name: &str) -> String {
    format!("{}{}", OBJECT_PREFIX, name.to_ascii_lowercase())
}

fn replace_all(line: &str, pairs: &[(String, String)]) -> String {
    let mut out = line.to_string();
    for (from, to) in pairs {
        if out.contains(from.as_str()) {
            out = out.replace(from.as_str(), to);
        }
    }
    out
}
