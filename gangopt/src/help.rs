// ============================================================================
// Help/usage rendering over a built parser (read-only)
// ============================================================================

use std::fmt::Write as _;
use std::io::Write as _;

use crate::error::{Error, HelpRequest};
use crate::option::{Kind, Opt};
use crate::parser::{Parser, DEFAULT_GROUP};

const HELP_COLUMN: usize = 30;
const USAGE_WIDTH: usize = 60;
const USAGE_INTRO: &str = "Usage:";

fn format_long<R>(opt: &Opt<R>, name: &str) -> String {
    let arg = opt.arg_name_or_default();
    match opt.kind() {
        Kind::Boolean => format!("--{}", name),
        Kind::Direct => format!("--{}={}", name, arg),
        Kind::Optional => format!("--{}[={}]", name, arg),
        Kind::List => format!("--{}={}...", name, arg),
    }
}

fn format_short<R>(opt: &Opt<R>, c: char) -> String {
    let arg = opt.arg_name_or_default();
    match opt.kind() {
        Kind::Boolean => format!("-{}", c),
        Kind::Direct => format!("-{} {}", c, arg),
        Kind::Optional => format!("-{}[{}]", c, arg),
        Kind::List => format!("-{} {}...", c, arg),
    }
}

/// Accumulates `[item]`s, wrapping before `USAGE_WIDTH`.
struct UsageLines {
    out: String,
    line: String,
}

impl UsageLines {
    fn new(program: &str) -> Self {
        UsageLines {
            out: String::new(),
            line: format!("{} {}", USAGE_INTRO, program),
        }
    }

    fn push(&mut self, item: &str) {
        if self.line.len() + item.len() + 1 > USAGE_WIDTH {
            self.out.push_str(&self.line);
            self.out.push('\n');
            self.line = " ".repeat(USAGE_INTRO.len());
        }
        self.line.push(' ');
        self.line.push_str(item);
    }

    fn finish(mut self) -> String {
        self.out.push_str(&self.line);
        self.out.push('\n');
        self.out
    }
}

impl<R> Parser<R> {
    fn visible_options(&self) -> impl Iterator<Item = &Opt<R>> {
        self.options().filter(|o| !o.is_hidden())
    }

    fn list_suffix(&self) -> &'static str {
        if self.positional().ends_in_list() {
            "..."
        } else {
            ""
        }
    }

    /// `Usage: prog [OPTIONS] one two...`
    pub fn usage_line(&self) -> String {
        let mut line = format!("{} {} [OPTIONS]", USAGE_INTRO, self.name());
        for slot in self.positional().slots() {
            let _ = write!(line, " {}", slot.name());
        }
        line.push_str(self.list_suffix());
        line.push('\n');
        line
    }

    /// Usage line followed by every visible option, grouped.
    pub fn help_text(&self) -> String {
        let mut out = self.usage_line();
        let mut current: Option<&str> = None;

        for opt in self.visible_options() {
            let group = opt.group().unwrap_or(DEFAULT_GROUP);
            if current != Some(group) {
                let _ = write!(out, "\n{}:\n", group);
                current = Some(group);
            }

            let mut line = String::from(" ");
            match opt.short_name() {
                Some(c) => {
                    let _ = write!(line, " -{},", c);
                }
                None => line.push_str("    "),
            }
            if let Some(name) = opt.long_name() {
                line.push(' ');
                line.push_str(&format_long(opt, name));
            }
            for alias in opt.aliases() {
                line.push_str(", ");
                line.push_str(&format_long(opt, alias));
            }

            if line.len() < HELP_COLUMN {
                line.push_str(&" ".repeat(HELP_COLUMN - line.len()));
            } else {
                line.push(' ');
            }
            let _ = writeln!(out, "{}{}", line, opt.help_text());
        }

        out.push('\n');
        out
    }

    /// Compact usage: flag letters, then sorted short and long forms.
    pub fn usage_text(&self) -> String {
        let mut flags: Vec<char> = Vec::new();
        let mut shorts: Vec<String> = Vec::new();
        let mut longs: Vec<String> = Vec::new();

        for opt in self.visible_options() {
            if let Some(c) = opt.short_name() {
                if opt.kind() == Kind::Boolean {
                    flags.push(c);
                } else {
                    shorts.push(format_short(opt, c));
                }
            }
            if let Some(name) = opt.long_name() {
                longs.push(format_long(opt, name));
            }
        }
        flags.sort_unstable();
        shorts.sort();
        longs.sort();

        let mut lines = UsageLines::new(self.name());
        if !flags.is_empty() {
            let flags: String = flags.into_iter().collect();
            lines.push(&format!("[-{}]", flags));
        }
        for item in shorts.iter().chain(longs.iter()) {
            lines.push(&format!("[{}]", item));
        }
        for slot in self.positional().slots() {
            if slot.is_list() {
                lines.push(&format!("{}...", slot.name()));
            } else {
                lines.push(slot.name());
            }
        }
        lines.finish()
    }

    /// Text to show the user for `err`: help/usage output for a help
    /// request, otherwise `prog: message` plus a pointer to `--help`.
    pub fn report(&self, err: &Error) -> String {
        match err {
            Error::Help(HelpRequest::Help) => self.help_text(),
            Error::Help(HelpRequest::Usage) => self.usage_text(),
            _ => {
                let mut out = format!("{}: {}\n", self.name(), err);
                if self.has_auto_help() {
                    let _ = writeln!(
                        out,
                        "Try '{} --help' or '{} --usage' for more information.",
                        self.name(),
                        self.name()
                    );
                }
                out
            }
        }
    }

    pub fn print_help(&self) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = write!(out, "{}", self.help_text());
    }

    pub fn print_usage(&self) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = write!(out, "{}", self.usage_text());
    }
}
