use std::collections::HashMap;

use crate::value::Value;

/// Variable store for one program run. The language has a single flat
/// scope, so loops and branches all read and write the same table.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_overwrites() {
        let mut environment = Environment::new();
        assert!(!environment.contains("x"));

        environment.set("x", Value::Number(1.0));
        assert_eq!(environment.get("x"), Some(&Value::Number(1.0)));

        environment.set("x", Value::String("two".to_string()));
        assert_eq!(environment.get("x"), Some(&Value::String("two".to_string())));
    }

    #[test]
    fn missing_names_are_none() {
        let environment = Environment::new();
        assert_eq!(environment.get("nothing"), None);
    }
}
