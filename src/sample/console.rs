// Copyright 2026 The netappfiles developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! User-facing progress output.
//!
//! This is separate from logging: progress lines always go to the console,
//! while `RUST_LOG` controls the diagnostic log.

use std::fmt;
use std::io::{self, Stdout, Write};

use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Console printing timestamped progress lines.
pub struct Console<W: Write> {
    out: W,
}

impl Console<Stdout> {
    /// Console writing to the standard output.
    pub fn stdout() -> Console<Stdout> {
        Console::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    /// Console writing to the given writer.
    pub fn new(out: W) -> Console<W> {
        Console { out }
    }

    /// Print a banner: the text underlined with dashes.
    pub fn header(&mut self, text: &str) {
        let line = "-".repeat(text.chars().count());
        self.write(format_args!("{}\n{}\n", text, line));
    }

    /// Print a line prefixed with the current local time.
    pub fn output(&mut self, text: &str) {
        let now = Local::now().format(TIMESTAMP_FORMAT);
        self.write(format_args!("{}: {}\n", now, text));
    }

    /// Consume the console, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(args).and_then(|_| self.out.flush()) {
            warn!("Failed to write to the console: {}", err);
        }
    }
}

impl<W: Write> fmt::Debug for Console<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
