// Pattern 1: Creational Patterns - Factory
// `Person::new` is the single place a person gets assembled.

use crate::config::DemoConfig;
use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub last_name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let person = Person::new("John", "Doe", 25);
    println!("{} ({})", person.full_name(), person.age);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let person = Person::new("John", "Doe", 25);
        assert_eq!(person.full_name(), "John Doe");
        assert_eq!(person.age, 25);
    }
}
