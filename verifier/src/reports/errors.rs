use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected to have file at: {0}")]
    MissingFile(String),
    #[error("{subject} did not match, expected `{expected}` but found `{actual}`")]
    Mismatch {
        subject: String,
        expected: String,
        actual: String,
    },
    #[error("Error parsing XML document {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Error parsing JSON document {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Error parsing YAML document {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Malformed document `{0}`")]
    MalformedDocument(String),
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    IllegalArguments(String),
    #[error("The path `{0}` is not a directory to write completions into")]
    InvalidCompletionsPath(String),
    #[error("Could not initialize logging {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

impl Error {
    /// Assertion failures against the fixtures, as opposed to errors reading them.
    pub fn is_failure(&self) -> bool {
        matches!(self, Error::MissingFile(_) | Error::Mismatch { .. })
    }
}

pub(crate) fn assert_equal<T>(subject: &str, expected: &T, actual: &T) -> Result<(), Error>
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        return Ok(());
    }

    Err(Error::Mismatch {
        subject: subject.to_string(),
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}
