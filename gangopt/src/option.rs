// ============================================================================
// Option descriptors
// ============================================================================

use crate::error::HelpRequest;

/// How an option consumes values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Takes no value; the setter receives `"true"`.
    Boolean,
    /// Takes exactly one value, attached or from the next token.
    Direct,
    /// Takes a value only when attached (`--name=v`, `-nv`).
    Optional,
    /// Takes one attached value, or every following non-option token.
    List,
}

/// Value passed to the setter of a Boolean option.
pub const TRUE: &str = "true";

pub type SetResult = std::result::Result<(), String>;

/// Applies one string value to the caller's record.
pub trait Setter<R>: Send + Sync {
    fn set(&self, record: &mut R, value: &str) -> SetResult;
}

impl<R, F> Setter<R> for F
where
    F: Fn(&mut R, &str) -> SetResult + Send + Sync,
{
    fn set(&self, record: &mut R, value: &str) -> SetResult {
        self(record, value)
    }
}

pub(crate) enum Action<R> {
    Set(Box<dyn Setter<R>>),
    Help(HelpRequest),
}

/// An option descriptor, built with chained methods:
///
/// ```
/// use gangopt::{store, Opt};
///
/// struct Args { verbose: bool }
///
/// let opt = Opt::boolean(store::flag(|a: &mut Args| &mut a.verbose))
///     .short('v')
///     .long("verbose")
///     .help("Print more");
/// assert_eq!(opt.short_name(), Some('v'));
/// ```
pub struct Opt<R> {
    short_name: Option<char>,
    long_name: Option<String>,
    aliases: Vec<String>,
    kind: Kind,
    pub(crate) action: Action<R>,
    help: String,
    arg_name: Option<String>,
    implicit: String,
    hidden: bool,
    pub(crate) group: Option<String>,
}

impl<R> Opt<R> {
    fn with_action(kind: Kind, action: Action<R>) -> Self {
        Opt {
            short_name: None,
            long_name: None,
            aliases: Vec::new(),
            kind,
            action,
            help: String::new(),
            arg_name: None,
            implicit: String::new(),
            hidden: false,
            group: None,
        }
    }

    pub(crate) fn help_request(request: HelpRequest, name: &str, help: &str) -> Self {
        let mut opt = Opt::with_action(Kind::Boolean, Action::Help(request));
        opt.long_name = Some(name.to_string());
        opt.help = help.to_string();
        opt
    }

    pub fn short(mut self, c: char) -> Self {
        self.short_name = Some(c);
        self
    }

    pub fn long(mut self, name: &str) -> Self {
        self.long_name = Some(name.to_string());
        self
    }

    /// Additional long name resolving to this option.
    pub fn alias(mut self, name: &str) -> Self {
        self.aliases.push(name.to_string());
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.help = text.to_string();
        self
    }

    /// Placeholder shown for the value in help output (default `ARG`).
    pub fn arg_name(mut self, name: &str) -> Self {
        self.arg_name = Some(name.to_string());
        self
    }

    /// Value handed to an Optional option's setter when none is attached.
    pub fn implicit(mut self, value: &str) -> Self {
        self.implicit = value.to_string();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn help_text(&self) -> &str {
        &self.help
    }

    pub fn arg_name_or_default(&self) -> &str {
        self.arg_name.as_deref().unwrap_or("ARG")
    }

    pub fn implicit_value(&self) -> &str {
        &self.implicit
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

impl<R: 'static> Opt<R> {
    /// Option of the given kind driven by any `Setter` implementation.
    pub fn with_setter<S>(kind: Kind, setter: S) -> Self
    where
        S: Setter<R> + 'static,
    {
        Opt::with_action(kind, Action::Set(Box::new(setter)))
    }

    pub fn boolean<F>(set: F) -> Self
    where
        F: Fn(&mut R, &str) -> SetResult + Send + Sync + 'static,
    {
        Opt::with_setter(Kind::Boolean, set)
    }

    pub fn direct<F>(set: F) -> Self
    where
        F: Fn(&mut R, &str) -> SetResult + Send + Sync + 'static,
    {
        Opt::with_setter(Kind::Direct, set)
    }

    pub fn optional<F>(set: F) -> Self
    where
        F: Fn(&mut R, &str) -> SetResult + Send + Sync + 'static,
    {
        Opt::with_setter(Kind::Optional, set)
    }

    /// The setter runs once per collected value.
    pub fn list<F>(set: F) -> Self
    where
        F: Fn(&mut R, &str) -> SetResult + Send + Sync + 'static,
    {
        Opt::with_setter(Kind::List, set)
    }
}
