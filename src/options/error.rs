use std::{borrow::Cow, num::ParseIntError, path::PathBuf};

/// An error around some option-setting, and the reason.
///
/// These are meant to potentially be user-facing (e.g. explain
/// why it's broken and what to fix), and as so treat it as such!
///
/// For stylistic and consistency reasons, use _single quotes_ (e.g. `'bad'`)
/// for highlighting error values.
#[derive(Debug, PartialEq)]
pub enum OptionError {
    Config(Cow<'static, str>),
    /// An integer option that could not be parsed. The original parse error is kept
    /// as the source.
    InvalidInteger {
        option: &'static str,
        value: String,
        source: ParseIntError,
    },
    /// The resolved device path does not exist.
    UnknownDevice(PathBuf),
}

impl OptionError {
    /// Create a new [`OptionError::Config`].
    pub(crate) fn config<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Config(reason.into())
    }

    /// Create a new [`OptionError::InvalidInteger`].
    pub(crate) fn invalid_integer(option: &'static str, value: &str, source: ParseIntError) -> Self {
        OptionError::InvalidInteger {
            option,
            value: value.to_string(),
            source,
        }
    }
}

pub type OptionResult<T> = Result<T, OptionError>;

impl std::fmt::Display for OptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionError::Config(reason) => write!(f, "Configuration file error: {reason}"),
            OptionError::InvalidInteger { option, value, .. } => write!(
                f,
                "Argument error: '{option}' was set with an invalid value '{value}', expected a base-10 integer."
            ),
            OptionError::UnknownDevice(path) => {
                write!(f, "Unknown block device \"{}\"", path.display())
            }
        }
    }
}

impl std::error::Error for OptionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionError::InvalidInteger { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<toml_edit::de::Error> for OptionError {
    fn from(err: toml_edit::de::Error) -> Self {
        OptionError::Config(err.to_string().into())
    }
}
