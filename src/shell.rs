// SPDX: CC0-1.0

use anyhow::Context;
use core::fmt;
use std::io::{self, BufRead, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    SetFn,
    List,
    SetWin,
    Plot,
    Bounce,
}

impl Command {
    pub const fn exhaustive() -> &'static [Command] {
        &[
            Self::Help,
            Self::Quit,
            Self::SetFn,
            Self::List,
            Self::SetWin,
            Self::Plot,
            Self::Bounce,
        ]
    }

    pub const fn help(&self) -> &'static str {
        match self {
            Self::Help => "display help for each command",
            Self::Quit => "quit the shell",
            Self::SetFn => "choose the function to plot",
            Self::List => "list the functions that can be plotted",
            Self::SetWin => "set axis and canvas parameters",
            Self::Plot => "plot the chosen function to an svg file",
            Self::Bounce => "animate a ball bouncing around the canvas and save its trail",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::SetFn => "fn",
            Self::List => "list",
            Self::SetWin => "window",
            Self::Plot => "plot",
            Self::Bounce => "bounce",
        }
    }
}

impl core::str::FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for c in Self::exhaustive() {
            if s == c.name() {
                return Ok(*c);
            }
        }
        Err(())
    }
}

/// Prompts on `out` and reads one trimmed line from `src`, or `None` once
/// `src` is exhausted.
pub fn input<R: BufRead, W: Write>(
    src: R,
    out: W,
    prompt: impl fmt::Display,
) -> anyhow::Result<Option<String>> {
    fn inner<R: BufRead, W: Write>(
        mut src: R,
        mut out: W,
        prompt: impl fmt::Display,
    ) -> io::Result<Option<String>> {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut s = String::new();
        if src.read_line(&mut s)? == 0 {
            return Ok(None);
        }
        Ok(Some(s.trim().to_string()))
    }

    let s = inner(src, out, prompt).context("read from standard input failed")?;
    Ok(s)
}

/// Prompts for a `T`. Blank input, or none at all, gives `Ok(None)` when
/// `ignore_empty` is set; unparsable input is reported to `out` and handed back
/// as the parse error.
pub fn read_fromstr<R: BufRead, W: Write, T: core::str::FromStr>(
    src: R,
    mut out: W,
    prompt: impl fmt::Display,
    ignore_empty: bool,
) -> anyhow::Result<Result<Option<T>, <T as core::str::FromStr>::Err>>
where
    <T as core::str::FromStr>::Err: fmt::Display,
{
    let input = input(src, &mut out, prompt)?.unwrap_or_default();
    if ignore_empty && input.is_empty() {
        return Ok(Ok(None));
    }
    match input.parse::<T>() {
        Ok(new) => Ok(Ok(Some(new))),
        Err(err) => {
            writeln!(out)?;
            underline(&mut out, &input)?;
            writeln!(out, "parse error: {err}")?;
            Ok(Err(err))
        }
    }
}

pub fn underline<W: Write>(mut out: W, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")?;
    writeln!(out, "{}", "^".repeat(text.chars().count().max(1)))?;
    Ok(())
}

pub fn fn_undefined<W: Write>(mut out: W) -> io::Result<()> {
    writeln!(out, "error: no function is chosen")
}
