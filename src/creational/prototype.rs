// Pattern 1: Creational Patterns - Prototype
// New objects are copied from an existing one rather than built from scratch.

use super::factory::Person;
use crate::config::DemoConfig;
use crate::error::PatternError;

pub trait Prototype: Clone {
    fn clone_prototype(&self) -> Self {
        self.clone()
    }
}

impl Prototype for Person {}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let person1 = Person::new("John", "Doe", 25);
    let mut person2 = person1.clone_prototype();
    println!("Original: {person1:?}");
    println!("Clone:    {person2:?}");

    person2.name = "Jane".to_string();
    println!("After renaming the clone, original is still {}", person1.full_name());
    Ok(())
}
