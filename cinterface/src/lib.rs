//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! c_interface - translate the EPAX C++ interface header into a C header.
//!
//! The translation is a line-at-a-time text rewrite driven by fixed tables
//! (see [`rules::RuleSet`]); nothing here parses C++.

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use error::{Error, Result};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

pub mod error;
pub mod line;
pub mod rules;
pub mod translate;

pub use line::{translate_line, LineKind, Translation};
pub use rules::RuleSet;
pub use translate::{banner, translate_file, translate_stream};

const PROGRAM_NAME: &str = "c_interface";

#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, version, about)]
pub struct Args {
    /// EPAX C++ interface header to read.
    pub cpp_interface: PathBuf,
    /// C header to write, created or truncated.
    pub c_interface: PathBuf,
}

/// Runs the whole tool for the command line `argv` (program name included).
///
/// Failures are reported on `stdout` or `stderr` before being returned, so
/// the caller only has to turn the result into an exit status.
pub fn run<STDOUT: Write, STDERR: Write>(
    argv: &[OsString],
    mut stdout: STDOUT,
    mut stderr: STDERR,
) -> Result<()> {
    let argv0 = argv
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| PROGRAM_NAME.to_string());

    let result = match Args::try_parse_from(argv) {
        Ok(args) => {
            let rules = RuleSet::epax();
            translate_file(&rules, &args.cpp_interface, &args.c_interface, &banner(argv))
        }
        Err(e)
            if matches!(
                e.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            return write!(stdout, "{}", e.render())
                .and_then(|_| stdout.flush())
                .map_err(|e| Error::io("cannot write to stdout", e));
        }
        Err(e) => {
            log::debug!("argument parsing failed: {e}");
            Err(Error::Usage)
        }
    };

    if let Err(error) = &result {
        report(&argv0, error, &mut stdout, &mut stderr)
            .map_err(|e| Error::io("cannot report error", e))?;
    }
    result
}

fn report<STDOUT: Write, STDERR: Write>(
    argv0: &str,
    error: &Error,
    stdout: &mut STDOUT,
    stderr: &mut STDERR,
) -> std::io::Result<()> {
    if error.wants_usage() {
        writeln!(stdout, "usage: {argv0} <EPAX_C++_interface> <EPAX_C_interface>")?;
        writeln!(stdout, "error: {error}")?;
        stdout.flush()
    } else {
        writeln!(stderr, "{argv0}: {error}")?;
        stderr.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn run_captured(args: &[&str]) -> (Result<()>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run(&argv(args), &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn wrong_arity_prints_usage() {
        let usage = "usage: ./c_interface <EPAX_C++_interface> <EPAX_C_interface>\n\
                     error: exactly 2 arguments required\n";

        for args in [
            &["./c_interface"][..],
            &["./c_interface", "a.hpp"][..],
            &["./c_interface", "a.hpp", "a.h", "extra"][..],
        ] {
            let (result, out, err) = run_captured(args);
            assert!(matches!(result, Err(Error::Usage)));
            assert_eq!(out, usage);
            assert_eq!(err, "");
        }
    }

    #[test]
    fn missing_input_prints_usage() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nope.hpp");
        let output = dir.path().join("nope.h");
        let (result, out, err) = run_captured(&[
            "c_interface",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);

        assert!(matches!(result, Err(Error::InputNotFound(_))));
        assert_eq!(
            out,
            format!(
                "usage: c_interface <EPAX_C++_interface> <EPAX_C_interface>\n\
                 error: file cannot be found: {}\n",
                input.display()
            )
        );
        assert_eq!(err, "");
        assert!(!output.exists());
    }

    #[test]
    fn io_error_goes_to_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Interface.hpp");
        std::fs::write(&input, "bool b;\n").unwrap();
        let output = dir.path().join("no-such-dir").join("Interface.h");
        let (result, out, err) = run_captured(&[
            "c_interface",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);

        assert!(matches!(result, Err(Error::Io { .. })));
        assert_eq!(out, "");
        assert!(err.starts_with(&format!("c_interface: cannot create {}: ", output.display())));
    }

    #[test]
    fn translates_with_banner() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Interface.hpp");
        let output = dir.path().join("Interface.h");
        std::fs::write(&input, "class Binary;\ntypedef Binary* BIN;\n").unwrap();
        let args = [
            "c_interface",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ];

        let (result, out, err) = run_captured(&args);
        assert!(result.is_ok());
        assert_eq!(out, "");
        assert_eq!(err, "");
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            format!(
                "/* automatically generated via `{}' */\ntypedef void* EPAX_bin;\n",
                args.join(" ")
            )
        );
    }

    #[test]
    fn help_is_not_an_error() {
        let (result, out, _) = run_captured(&["c_interface", "--help"]);
        assert!(result.is_ok());
        assert!(out.contains("<CPP_INTERFACE>"));
    }
}
