use tracing::{debug, trace};

use crate::error::{Error, HelpRequest, Result};
use crate::option::{Action, Kind, Opt, TRUE};
use crate::positional::Positional;
use crate::short::ShortTable;
use crate::trie::LongTrie;

pub(crate) const DEFAULT_GROUP: &str = "Options";
const HELP_GROUP: &str = "Help";

// ============================================================================
// ParserBuilder
// ============================================================================

pub struct ParserBuilder<R> {
    name: String,
    options: Vec<Opt<R>>,
    group: Option<String>,
    positional: Positional<R>,
    auto_help: bool,
}

impl<R> ParserBuilder<R> {
    pub fn new(name: &str) -> Self {
        ParserBuilder {
            name: name.to_string(),
            options: Vec::new(),
            group: None,
            positional: Positional::new(),
            auto_help: false,
        }
    }

    /// Label every option registered after this call with `label`.
    pub fn group(mut self, label: &str) -> Self {
        self.group = Some(label.to_string());
        self
    }

    pub fn option(mut self, mut opt: Opt<R>) -> Self {
        opt.group = Some(
            self.group
                .clone()
                .unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        );
        self.options.push(opt);
        self
    }

    pub fn positional(mut self, schema: Positional<R>) -> Self {
        self.positional = schema;
        self
    }

    /// Register `--help` and `--usage`.
    pub fn auto_help(mut self) -> Self {
        self.auto_help = true;
        self
    }

    pub fn build(self) -> Result<Parser<R>> {
        let mut options = self.options;
        if self.auto_help {
            for (request, name, help) in [
                (HelpRequest::Help, "help", "Give this help list"),
                (HelpRequest::Usage, "usage", "Give a short usage message"),
            ] {
                let mut opt = Opt::help_request(request, name, help);
                opt.group = Some(HELP_GROUP.to_string());
                options.push(opt);
            }
        }

        let mut short = ShortTable::new();
        let mut long = LongTrie::new();
        for (idx, opt) in options.iter().enumerate() {
            // aliases hang off a long name, never replace it
            if let (None, Some(alias)) = (opt.long_name(), opt.aliases().first()) {
                return Err(Error::InvalidOption(alias.clone()));
            }
            if opt.short_name().is_none() && opt.long_name().is_none() {
                return Err(Error::MissingOption(idx));
            }
            if let Some(c) = opt.short_name() {
                if !short.set(c, idx)? {
                    return Err(Error::DuplicateOption(format!("-{}", c)));
                }
            }
            let names = opt
                .long_name()
                .into_iter()
                .chain(opt.aliases().iter().map(String::as_str));
            for name in names {
                if !long.set(name, idx)? {
                    return Err(Error::DuplicateOption(format!("--{}", name)));
                }
            }
        }

        self.positional.validate()?;

        debug!(
            program = %self.name,
            options = options.len(),
            positional = self.positional.len(),
            "parser built"
        );

        Ok(Parser {
            name: self.name,
            options,
            short,
            long,
            positional: self.positional,
            auto_help: self.auto_help,
        })
    }
}

// ============================================================================
// Parser
// ============================================================================

/// Immutable option registry plus positional schema.
///
/// A parser holds no per-parse state; any number of `parse` calls, on any
/// number of records, may share one instance.
pub struct Parser<R> {
    name: String,
    options: Vec<Opt<R>>,
    short: ShortTable,
    long: LongTrie,
    positional: Positional<R>,
    auto_help: bool,
}

impl<R> Parser<R> {
    pub fn builder(name: &str) -> ParserBuilder<R> {
        ParserBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> impl Iterator<Item = &Opt<R>> {
        self.options.iter()
    }

    pub fn positional(&self) -> &Positional<R> {
        &self.positional
    }

    pub fn has_auto_help(&self) -> bool {
        self.auto_help
    }

    pub fn option_by_short(&self, c: char) -> Result<&Opt<R>> {
        self.short
            .get(c)
            .map(|idx| &self.options[idx])
            .ok_or_else(|| Error::UnknownOption(format!("-{}", c)))
    }

    /// Exact name or unambiguous prefix.
    pub fn option_by_long(&self, name: &str) -> Result<&Opt<R>> {
        self.long
            .get(name)
            .map(|idx| &self.options[idx])
            .ok_or_else(|| Error::UnknownOption(format!("--{}", name)))
    }

    /// Parse `tokens` (program name excluded) into `record`.
    pub fn parse<S: AsRef<str>>(&self, record: &mut R, tokens: &[S]) -> Result<()> {
        debug!(program = %self.name, tokens = tokens.len(), "parse");
        let result = Dispatcher::new(self, record, tokens).run();
        if let Err(ref e) = result {
            debug!(program = %self.name, error = %e, "parse failed");
        }
        result
    }

    /// Parse a full argv whose element 0 is the program name.
    pub fn parse_args<S: AsRef<str>>(&self, record: &mut R, argv: &[S]) -> Result<()> {
        match argv.split_first() {
            Some((_, tokens)) => self.parse(record, tokens),
            None => Err(Error::Empty),
        }
    }

    /// Parse the process's own command line.
    pub fn parse_env(&self, record: &mut R) -> Result<()> {
        let argv: Vec<String> = std::env::args().collect();
        self.parse_args(record, &argv)
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

fn is_option(token: &str) -> bool {
    token.starts_with('-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Options,
    Positional,
    Terminated,
}

/// Single left-to-right pass over one token vector.
struct Dispatcher<'p, 'r, 't, R, S> {
    parser: &'p Parser<R>,
    record: &'r mut R,
    tokens: &'t [S],
    next: usize,
    phase: Phase,
    filled: usize,
}

impl<'p, 'r, 't, R, S: AsRef<str>> Dispatcher<'p, 'r, 't, R, S> {
    fn new(parser: &'p Parser<R>, record: &'r mut R, tokens: &'t [S]) -> Self {
        Dispatcher {
            parser,
            record,
            tokens,
            next: 0,
            phase: Phase::Options,
            filled: 0,
        }
    }

    fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.next).map(AsRef::as_ref)
    }

    fn enter(&mut self, phase: Phase) {
        trace!(from = ?self.phase, to = ?phase, at = self.next, "phase change");
        self.phase = phase;
    }

    fn run(mut self) -> Result<()> {
        while let Some(token) = self.peek() {
            if self.phase != Phase::Options {
                self.positional(token)?;
                self.next += 1;
                continue;
            }

            if !is_option(token) {
                self.enter(Phase::Positional);
                continue;
            }
            self.next += 1;

            if token == "-" {
                return Err(Error::UnknownOption(token.to_string()));
            }
            if token == "--" {
                self.enter(Phase::Terminated);
                continue;
            }
            match token.strip_prefix("--") {
                Some(body) => self.long(body)?,
                None => self.gang(&token[1..])?,
            }
        }
        self.finish()
    }

    /// `--name`, `--name=value`.
    fn long(&mut self, body: &'t str) -> Result<()> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        let ident = format!("--{}", name);
        let parser = self.parser;
        let opt = parser.option_by_long(name)?;
        self.values(opt, &ident, inline)
    }

    /// `-abc`, `-nVALUE`, `-n=VALUE`.
    fn gang(&mut self, body: &'t str) -> Result<()> {
        let parser = self.parser;
        for (pos, c) in body.char_indices() {
            let ident = format!("-{}", c);
            let opt = parser.option_by_short(c)?;

            if opt.kind() == Kind::Boolean {
                self.values(opt, &ident, None)?;
                continue;
            }

            let rest = &body[pos + c.len_utf8()..];
            let inline = match rest {
                "" => None,
                _ => Some(rest.strip_prefix('=').unwrap_or(rest)),
            };
            return self.values(opt, &ident, inline);
        }
        Ok(())
    }

    /// Deliver the value(s) of one occurrence of `opt`.
    fn values(&mut self, opt: &'p Opt<R>, ident: &str, inline: Option<&'t str>) -> Result<()> {
        match (opt.kind(), inline) {
            (Kind::Boolean, Some(_)) => Err(Error::SuperfluousArgument(ident.to_string())),
            (Kind::Boolean, None) => self.invoke(opt, ident, TRUE),
            (Kind::Direct | Kind::List, Some("")) => {
                Err(Error::MissingArgument(ident.to_string()))
            }
            (_, Some(value)) => self.invoke(opt, ident, value),
            (Kind::Optional, None) => self.invoke(opt, ident, opt.implicit_value()),
            (Kind::Direct, None) => {
                let value = self
                    .take_value()
                    .ok_or_else(|| Error::MissingArgument(ident.to_string()))?;
                self.invoke(opt, ident, value)
            }
            (Kind::List, None) => {
                let first = self
                    .take_value()
                    .ok_or_else(|| Error::MissingArgument(ident.to_string()))?;
                self.invoke(opt, ident, first)?;
                while let Some(value) = self.take_value() {
                    self.invoke(opt, ident, value)?;
                }
                Ok(())
            }
        }
    }

    /// Consume the next token if it is not option-shaped.
    fn take_value(&mut self) -> Option<&'t str> {
        let token = self.peek().filter(|t| !is_option(t))?;
        self.next += 1;
        Some(token)
    }

    fn invoke(&mut self, opt: &'p Opt<R>, ident: &str, value: &str) -> Result<()> {
        trace!(option = ident, value, "option");
        match &opt.action {
            Action::Help(request) => Err(Error::Help(*request)),
            Action::Set(setter) => {
                setter
                    .set(self.record, value)
                    .map_err(|reason| Error::InvalidArgument {
                        option: ident.to_string(),
                        value: value.to_string(),
                        reason,
                    })
            }
        }
    }

    fn positional(&mut self, token: &str) -> Result<()> {
        if self.phase == Phase::Positional {
            if token == "--" {
                return Err(Error::InvalidTerminal(token.to_string()));
            }
            if is_option(token) {
                return Err(Error::InvalidPositional(token.to_string()));
            }
        }

        let parser = self.parser;
        let slot = parser
            .positional
            .slot_for(self.filled)
            .ok_or_else(|| Error::SuperfluousPositional(token.to_string()))?;
        trace!(slot = slot.name(), value = token, "positional");
        slot.setter
            .set(self.record, token)
            .map_err(|reason| Error::InvalidArgument {
                option: slot.name().to_string(),
                value: token.to_string(),
                reason,
            })?;
        self.filled += 1;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        let slots = self.parser.positional.slots();
        if let Some(missing) = slots.get(self.filled) {
            return Err(Error::MissingPositional(missing.name().to_string()));
        }
        debug!(
            consumed = self.next,
            positional = self.filled,
            "parse complete"
        );
        Ok(())
    }
}
