use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level failure returned to `main`. Anything here ends the run
/// with a nonzero exit code.
#[derive(Debug)]
pub enum Error {
    Io { path: PathBuf, source: io::Error },
    NotGumSource(PathBuf),
    Fatal(FatalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "cannot open source file {}: {}", path.display(), source)
            }
            Error::NotGumSource(path) => {
                write!(f, "{} is not a GUM source file", path.display())
            }
            Error::Fatal(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::NotGumSource(_) => None,
            Error::Fatal(error) => Some(error),
        }
    }
}

impl From<FatalError> for Error {
    fn from(error: FatalError) -> Self {
        Error::Fatal(error)
    }
}

/// A structural problem the interpreter cannot recover from. Execution
/// stops where it stands; output produced so far is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum FatalError {
    NonNumericLoopCount { found: String, line: usize, column: usize },
    MalformedRandomBounds { found: String, line: usize, column: usize },
    InvalidRandomRange { min: i64, max: i64, line: usize },
    ElseWithoutBlock { line: usize, column: usize },
    UnterminatedBlock { line: usize },
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::NonNumericLoopCount { found, line, column } => write!(
                f,
                "for cycle count must be a number literal, found {} at line {}, column {}",
                found, line, column
            ),
            FatalError::MalformedRandomBounds { found, line, column } => write!(
                f,
                "random bounds must be number literals, found {} at line {}, column {}",
                found, line, column
            ),
            FatalError::InvalidRandomRange { min, max, line } => write!(
                f,
                "random range is empty: {} > {} at line {}",
                min, max, line
            ),
            FatalError::ElseWithoutBlock { line, column } => write!(
                f,
                "`else` must be followed by a block at line {}, column {}",
                line, column
            ),
            FatalError::UnterminatedBlock { line } => write!(
                f,
                "unterminated block: reached end of input while scanning for `}}` (opened at line {})",
                line
            ),
        }
    }
}

impl std::error::Error for FatalError {}

/// A mistake confined to one statement. The interpreter reports it,
/// substitutes a zero where a value was needed, and moves on.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    UndefinedVariable { name: String, line: usize },
    TypeMismatch { operation: String, left: &'static str, right: &'static str, line: usize },
    DivisionByZero { line: usize },
    InvalidNumber { text: String, line: usize },
    UnexpectedToken { found: String, line: usize, column: usize },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndefinedVariable { name, line } => {
                write!(f, "undefined variable `{}` at line {}", name, line)
            }
            RuntimeError::TypeMismatch { operation, left, right, line } => write!(
                f,
                "unsupported operation `{}` for {} and {} at line {}",
                operation, left, right, line
            ),
            RuntimeError::DivisionByZero { line } => {
                write!(f, "division by zero at line {}", line)
            }
            RuntimeError::InvalidNumber { text, line } => {
                write!(f, "invalid number literal `{}` at line {}", text, line)
            }
            RuntimeError::UnexpectedToken { found, line, column } => {
                write!(f, "unexpected {} at line {}, column {}", found, line, column)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
