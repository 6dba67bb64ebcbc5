// Pattern 2: Structural Patterns - Proxy
// Every read and write of the person goes through the proxy, which formats
// reads and refuses writes that break the age rule.

use crate::config::DemoConfig;
use crate::creational::factory::Person;
use crate::error::PatternError;
use std::str::FromStr;

pub const MINIMUM_AGE: u32 = 18;
pub const MISSING_PROPERTY: &str = "Property does not exist";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    LastName,
    Age,
}

impl FromStr for Field {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "lastName" | "last_name" => Ok(Field::LastName),
            "age" => Ok(Field::Age),
            other => Err(PatternError::unknown_field(other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PersonProxy {
    person: Person,
}

impl PersonProxy {
    pub fn new(name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            person: Person::new(name, last_name, age),
        }
    }

    /// Empty strings and a zero age count as missing.
    pub fn get(&self, field: Field) -> String {
        let value = match field {
            Field::Name => self.person.name.clone(),
            Field::LastName => self.person.last_name.clone(),
            Field::Age if self.person.age == 0 => String::new(),
            Field::Age => self.person.age.to_string(),
        };

        if value.is_empty() {
            MISSING_PROPERTY.to_string()
        } else {
            format!("The value is {value}")
        }
    }

    pub fn get_named(&self, property: &str) -> String {
        match property.parse::<Field>() {
            Ok(field) => self.get(field),
            Err(_) => MISSING_PROPERTY.to_string(),
        }
    }

    pub fn age(&self) -> u32 {
        self.person.age
    }

    pub fn set_age(&mut self, age: u32) -> Result<(), PatternError> {
        if age < MINIMUM_AGE {
            tracing::debug!(age, "age write rejected");
            return Err(PatternError::InvalidAge { age });
        }
        self.person.age = age;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.person.name = name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.person.last_name = last_name.into();
    }

    pub fn person(&self) -> &Person {
        &self.person
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let mut person = PersonProxy::new("John", "Doe", 25);

    println!("{}", person.get(Field::Name));
    println!("{}", person.get_named("email"));

    for age in [17, 20] {
        match person.set_age(age) {
            Ok(()) => println!("Age updated: {}", person.get(Field::Age)),
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}
