// Pattern 1: Creational Patterns - Singleton
// One shared instance, but owned by a registry created during setup and
// passed by reference, instead of hiding behind a mutable global.

use crate::config::DemoConfig;
use crate::error::PatternError;
use std::sync::{Arc, OnceLock};

#[derive(Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Default)]
pub struct ProfileRegistry {
    instance: OnceLock<Arc<Profile>>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared profile, creating it from these arguments only on
    /// the first call. Later arguments are ignored.
    pub fn instance(&self, name: &str, age: u32) -> Arc<Profile> {
        let profile = self.instance.get_or_init(|| {
            tracing::debug!(name, age, "creating shared profile");
            Arc::new(Profile {
                name: name.to_string(),
                age,
            })
        });
        Arc::clone(profile)
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let registry = ProfileRegistry::new();

    let person1 = registry.instance("John", 25);
    let person2 = registry.instance("Jane", 22);
    let person3 = registry.instance("Test", 30);

    println!("{}", Arc::ptr_eq(&person1, &person2));
    println!("{}", Arc::ptr_eq(&person2, &person3));
    println!("Shared instance: {} ({})", person3.name, person3.age);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_identity() {
        let registry = ProfileRegistry::new();
        let a = registry.instance("John", 25);
        let b = registry.instance("Jane", 22);
        let c = registry.instance("Test", 30);

        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&b, &c));
    }

    #[test]
    fn test_first_arguments_win() {
        let registry = ProfileRegistry::new();
        assert!(!registry.is_initialized());

        registry.instance("John", 25);
        let later = registry.instance("Jane", 22);

        assert!(registry.is_initialized());
        assert_eq!(later.name, "John");
        assert_eq!(later.age, 25);
    }

    #[test]
    fn test_registries_are_independent() {
        let first = ProfileRegistry::new();
        let second = ProfileRegistry::new();

        let a = first.instance("John", 25);
        let b = second.instance("Jane", 22);

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(b.name, "Jane");
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = Arc::new(ProfileRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.instance(&format!("thread-{i}"), i))
            })
            .collect();

        let profiles: Vec<Arc<Profile>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(profiles.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
