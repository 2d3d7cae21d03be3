//! Interchangeable selection UIs for the scratch file list.
//!
//! Every provider implements [`Picker`]: it receives the candidate paths and
//! calls `on_confirm` with the chosen one. Cancelling is not an error.
//!
//! # Providers
//! - [`BuiltinPicker`]: numbered list on the terminal, index read from stdin
//! - [`CommandPicker`]: pipes the entries through `fzf`, `sk` or `gum choose`

use crate::core::config::PickerProvider;
use crate::core::error::{Result, ScratchpadError};
use crate::core::output::{print_info, print_section_header};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub trait Picker {
    fn name(&self) -> &'static str;

    fn present(
        &self,
        entries: &[PathBuf],
        on_confirm: &mut dyn FnMut(PathBuf) -> Result<()>,
    ) -> Result<()>;
}

/// Resolve the picker configured for this session
pub fn picker_for(provider: PickerProvider) -> Box<dyn Picker> {
    match provider {
        PickerProvider::Builtin => Box::new(BuiltinPicker),
        PickerProvider::Fzf => Box::new(CommandPicker::fzf()),
        PickerProvider::Skim => Box::new(CommandPicker::skim()),
        PickerProvider::Gum => Box::new(CommandPicker::gum()),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub struct BuiltinPicker;

impl BuiltinPicker {
    /// Print the numbered entries to `output` and read a 1-based choice from
    /// `input`. Returns the 0-based index, or `None` for a blank answer.
    pub fn choose<R: BufRead, W: Write>(
        entries: &[PathBuf],
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<usize>> {
        for (index, entry) in entries.iter().enumerate() {
            writeln!(
                output,
                "{}{}{} {}",
                "[".bright_black(),
                (index + 1).to_string().white(),
                "]".bright_black(),
                display_name(entry).blue()
            )?;
        }
        write!(output, "\n{} ", "Open which scratch file?".white())?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        parse_choice(answer.trim(), entries.len())
    }
}

fn parse_choice(answer: &str, count: usize) -> Result<Option<usize>> {
    if answer.is_empty() {
        return Ok(None);
    }
    let index: usize = answer
        .parse()
        .map_err(|_| ScratchpadError::invalid_argument(format!("Invalid number: '{answer}'")))?;
    if index == 0 || index > count {
        return Err(ScratchpadError::invalid_argument(format!(
            "Index {index} is out of range (1-{count} available)"
        )));
    }
    Ok(Some(index - 1))
}

impl Picker for BuiltinPicker {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn present(
        &self,
        entries: &[PathBuf],
        on_confirm: &mut dyn FnMut(PathBuf) -> Result<()>,
    ) -> Result<()> {
        if entries.is_empty() {
            print_info("No scratch files yet.");
            return Ok(());
        }

        print_section_header("Scratch files");
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        match Self::choose(entries, &mut stdin.lock(), &mut stdout)? {
            Some(index) => on_confirm(entries[index].clone()),
            None => {
                log::debug!("Builtin picker cancelled");
                Ok(())
            }
        }
    }
}

/// A picker backed by an external program reading entries from stdin and
/// printing the selected one on stdout.
pub struct CommandPicker {
    name: &'static str,
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandPicker {
    pub fn fzf() -> Self {
        Self {
            name: "fzf",
            program: "fzf",
            args: &["--prompt", "Scratch> ", "--no-multi"],
        }
    }

    pub fn skim() -> Self {
        Self {
            name: "skim",
            program: "sk",
            args: &["--prompt", "Scratch> "],
        }
    }

    pub fn gum() -> Self {
        Self {
            name: "gum",
            program: "gum",
            args: &["choose", "--header", "Scratch files"],
        }
    }

    pub fn program(&self) -> &'static str {
        self.program
    }

    fn run(&self, entries: &[PathBuf]) -> Result<Option<PathBuf>> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ScratchpadError::external_tool_unavailable(self.program, e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            let listing: String = entries
                .iter()
                .map(|entry| format!("{}\n", entry.display()))
                .collect();
            stdin.write_all(listing.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            log::debug!("{} exited with {}, nothing selected", self.program, output.status);
            return Ok(None);
        }
        Ok(selection_from_output(&output.stdout))
    }
}

/// First non-blank line of a picker's stdout
pub fn selection_from_output(stdout: &[u8]) -> Option<PathBuf> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
}

impl Picker for CommandPicker {
    fn name(&self) -> &'static str {
        self.name
    }

    fn present(
        &self,
        entries: &[PathBuf],
        on_confirm: &mut dyn FnMut(PathBuf) -> Result<()>,
    ) -> Result<()> {
        if entries.is_empty() {
            log::debug!("{}: no entries to present", self.name);
            return Ok(());
        }

        match self.run(entries)? {
            Some(selected) => on_confirm(selected),
            None => Ok(()),
        }
    }
}
