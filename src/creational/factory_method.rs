// Pattern 1: Creational Patterns - Factory Method
// Callers ask a factory for a person instead of building one themselves,
// so the construction policy can be swapped without touching them.

use super::factory::Person;
use crate::config::DemoConfig;
use crate::error::PatternError;

pub trait Factory {
    fn create_person(&self, name: &str, last_name: &str, age: u32) -> Person;
}

#[derive(Debug, Default)]
pub struct PersonFactory;

impl Factory for PersonFactory {
    fn create_person(&self, name: &str, last_name: &str, age: u32) -> Person {
        Person::new(name, last_name, age)
    }
}

/// Ignores the requested age and stamps its own.
#[derive(Debug)]
pub struct DefaultAgeFactory {
    pub age: u32,
}

impl Factory for DefaultAgeFactory {
    fn create_person(&self, name: &str, last_name: &str, _age: u32) -> Person {
        Person::new(name, last_name, self.age)
    }
}

/// Asks `factory` for one person per name, all requested at `age`.
pub fn enroll(factory: &dyn Factory, names: &[(&str, &str)], age: u32) -> Vec<Person> {
    names
        .iter()
        .map(|(name, last_name)| factory.create_person(name, last_name, age))
        .collect()
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let factory = PersonFactory;
    let person = factory.create_person("John", "Doe", 25);
    println!("PersonFactory built: {person:?}");

    let names = [("Ada", "Lovelace"), ("Alan", "Turing")];
    let interns = enroll(&DefaultAgeFactory { age: 18 }, &names, 30);
    for intern in &interns {
        println!("DefaultAgeFactory built: {} ({})", intern.full_name(), intern.age);
    }
    Ok(())
}
