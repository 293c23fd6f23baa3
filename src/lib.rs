pub mod config;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod output;
pub mod token;
pub mod value;

pub use environment::Environment;
pub use error::{Error, FatalError, RuntimeError};
pub use interpreter::{run_file, run_source, Interpreter};
pub use lexer::Lexer;
pub use output::Output;
pub use token::{Kind, Token};
pub use value::Value;
