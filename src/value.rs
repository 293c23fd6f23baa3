use std::fmt;

use crate::error::RuntimeError;

/// A runtime value. There are exactly two shapes; everything else in the
/// language reduces to one of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    /// Addition never fails: two numbers sum, any other pairing renders
    /// both sides and concatenates.
    pub fn add(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            _ => Value::String(format!("{}{}", self, other)),
        }
    }

    pub fn subtract(&self, other: &Value, line: usize) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
            _ => Err(self.mismatch("-", other, line)),
        }
    }

    pub fn multiply(&self, other: &Value, line: usize) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
            _ => Err(self.mismatch("*", other, line)),
        }
    }

    pub fn divide(&self, other: &Value, line: usize) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Number(_), Value::Number(b)) if *b == 0.0 => {
                Err(RuntimeError::DivisionByZero { line })
            }
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
            _ => Err(self.mismatch("/", other, line)),
        }
    }

    /// Numbers support all six comparisons, strings only equality.
    pub fn compare(&self, operator: &str, other: &Value, line: usize) -> Result<bool, RuntimeError> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => match operator {
                "==" => Ok(a == b),
                "!=" => Ok(a != b),
                "<" => Ok(a < b),
                "<=" => Ok(a <= b),
                ">" => Ok(a > b),
                ">=" => Ok(a >= b),
                _ => Err(self.mismatch(operator, other, line)),
            },
            (Value::String(a), Value::String(b)) => match operator {
                "==" => Ok(a == b),
                "!=" => Ok(a != b),
                _ => Err(self.mismatch(operator, other, line)),
            },
            _ => Err(self.mismatch(operator, other, line)),
        }
    }

    fn mismatch(&self, operator: &str, other: &Value, line: usize) -> RuntimeError {
        RuntimeError::TypeMismatch {
            operation: operator.to_string(),
            left: self.type_name(),
            right: other.type_name(),
            line,
        }
    }
}

/// Whole numbers print without a decimal point, everything else with two
/// digits. The same rendering feeds `print` and string concatenation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            Value::Number(n) => write!(f, "{:.2}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}
