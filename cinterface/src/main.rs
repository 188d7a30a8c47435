//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use cinterface::error::GetExitCode;
use std::ffi::OsString;

fn main() {
    env_logger::init();

    let argv: Vec<OsString> = std::env::args_os().collect();
    let result = cinterface::run(&argv, std::io::stdout(), std::io::stderr());

    std::process::exit(result.get_exit_code())
}
