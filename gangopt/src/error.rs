use std::fmt;

/// Which built-in help output the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpRequest {
    /// `--help`: the full option list.
    Help,
    /// `--usage`: the compact usage summary.
    Usage,
}

impl fmt::Display for HelpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpRequest::Help => write!(f, "--help"),
            HelpRequest::Usage => write!(f, "--usage"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    // Registration
    #[error("invalid option name: {0}")]
    InvalidOption(String),

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("option #{0} has neither a short nor a long name")]
    MissingOption(usize),

    #[error("list argument must be the last positional: {0}")]
    MisplacedList(String),

    // Parsing
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("missing argument for option: {0}")]
    MissingArgument(String),

    #[error("option doesn't take an argument: {0}")]
    SuperfluousArgument(String),

    #[error("invalid argument '{value}' for {option}: {reason}")]
    InvalidArgument {
        option: String,
        value: String,
        reason: String,
    },

    #[error("invalid positional argument: {0}")]
    InvalidPositional(String),

    #[error("misplaced terminator: {0}")]
    InvalidTerminal(String),

    #[error("missing positional argument: {0}")]
    MissingPositional(String),

    #[error("superfluous positional argument: {0}")]
    SuperfluousPositional(String),

    #[error("argument vector is empty")]
    Empty,

    #[error("help requested: {0}")]
    Help(HelpRequest),
}

impl Error {
    /// True when the "error" is a request for help output, not a failure.
    pub fn is_help(&self) -> bool {
        matches!(self, Error::Help(_))
    }

    /// True for errors raised while building a parser.
    pub fn is_registration(&self) -> bool {
        matches!(
            self,
            Error::InvalidOption(_)
                | Error::DuplicateOption(_)
                | Error::MissingOption(_)
                | Error::MisplacedList(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_token() {
        assert_eq!(
            Error::UnknownOption("--frob".to_string()).to_string(),
            "unknown option: --frob"
        );
        assert_eq!(
            Error::Help(HelpRequest::Usage).to_string(),
            "help requested: --usage"
        );
        let err = Error::InvalidArgument {
            option: "-n".to_string(),
            value: "x".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument 'x' for -n: invalid digit found in string"
        );
    }

    #[test]
    fn classification() {
        assert!(Error::Help(HelpRequest::Help).is_help());
        assert!(!Error::Empty.is_help());
        assert!(Error::DuplicateOption("f".to_string()).is_registration());
        assert!(Error::MisplacedList("rest".to_string()).is_registration());
        assert!(!Error::MissingArgument("-n".to_string()).is_registration());
    }
}
