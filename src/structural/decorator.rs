// Pattern 2: Structural Patterns - Decorator
// Wraps a borrowed person and adds behaviour without touching `Person`.

use crate::config::DemoConfig;
use crate::creational::factory::Person;
use crate::error::PatternError;
use std::ops::Deref;

pub struct DecoratedPerson<'a> {
    person: &'a Person,
}

impl<'a> DecoratedPerson<'a> {
    pub fn new(person: &'a Person) -> Self {
        Self { person }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.person.name, self.person.last_name)
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.full_name())
    }
}

impl Deref for DecoratedPerson<'_> {
    type Target = Person;

    fn deref(&self) -> &Self::Target {
        self.person
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let person = Person::new("John", "Doe", 25);
    let decorated = DecoratedPerson::new(&person);

    println!("{}", decorated.full_name());
    println!("{} (age still reachable: {})", decorated.greeting(), decorated.age);
    Ok(())
}
