//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::error::{Error, Result};
use crate::line::translate_line;
use crate::rules::RuleSet;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// First line of every generated header, recording how it was produced.
pub fn banner(argv: &[OsString]) -> String {
    let cmdline: Vec<String> = argv
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    format!("/* automatically generated via `{}' */", cmdline.join(" "))
}

/// Translates every line of `reader` into `writer`. Returns the number of
/// input lines read. `input_name` and `output_name` only label errors.
pub fn translate_stream<R: BufRead, W: Write>(
    rules: &RuleSet,
    reader: R,
    writer: &mut W,
    input_name: &str,
    output_name: &str,
) -> Result<usize> {
    let mut n_lines = 0;

    for line in reader.lines() {
        let line = line.map_err(|e| Error::io(format!("cannot read {input_name}"), e))?;
        n_lines += 1;

        for out in translate_line(rules, &line) {
            writer
                .write_all(out.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| Error::io(format!("cannot write {output_name}"), e))?;
        }
    }

    Ok(n_lines)
}

/// Translates the header at `input` into `output`, creating or truncating it.
/// `banner` is written as the first line.
pub fn translate_file(rules: &RuleSet, input: &Path, output: &Path, banner: &str) -> Result<()> {
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let input_name = input.display().to_string();
    let output_name = output.display().to_string();

    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|e| Error::io(format!("cannot open {input_name}"), e))?;
    let mut writer = File::create(output)
        .map(BufWriter::new)
        .map_err(|e| Error::io(format!("cannot create {output_name}"), e))?;

    let write_err = |e| Error::io(format!("cannot write {output_name}"), e);

    writeln!(writer, "{banner}").map_err(write_err)?;
    let n_lines = translate_stream(rules, reader, &mut writer, &input_name, &output_name)?;
    writer.flush().map_err(write_err)?;

    log::info!("{input_name}: translated {n_lines} lines into {output_name}");

    Ok(())
}
