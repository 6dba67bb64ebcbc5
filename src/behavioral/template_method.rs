// Pattern 3: Behavioral Patterns - Template Method
// The trait fixes the recipe; implementors must supply the condiments step.
// Forgetting it is a compile error rather than a runtime failure.

use crate::config::DemoConfig;
use crate::error::PatternError;

pub trait Sandwich {
    fn name(&self) -> &str;

    fn cut_bread(&self) -> &'static str {
        "The bread is cut"
    }

    fn add_ingredients(&self) -> &'static str {
        "Add ingredients"
    }

    fn add_condiments(&self) -> &'static str;

    fn wrap(&self) -> &'static str {
        "Wrap the sandwich"
    }

    /// Runs every step in order and returns what each one did.
    fn make(&self) -> Vec<&'static str> {
        let steps = vec![
            self.cut_bread(),
            self.add_ingredients(),
            self.add_condiments(),
            self.wrap(),
        ];
        tracing::debug!(sandwich = self.name(), steps = steps.len(), "sandwich made");
        steps
    }
}

pub struct TurkeySandwich;

impl Sandwich for TurkeySandwich {
    fn name(&self) -> &str {
        "turkey"
    }

    fn add_condiments(&self) -> &'static str {
        "Add mustard and mayo"
    }
}

pub struct VeganSandwich;

impl Sandwich for VeganSandwich {
    fn name(&self) -> &str {
        "vegan"
    }

    fn add_condiments(&self) -> &'static str {
        "Add vegan mayo"
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let sandwiches: [&dyn Sandwich; 2] = [&TurkeySandwich, &VeganSandwich];
    for sandwich in sandwiches {
        println!("Making a {} sandwich:", sandwich.name());
        for step in sandwich.make() {
            println!("  {step}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkey_recipe() {
        assert_eq!(
            TurkeySandwich.make(),
            vec![
                "The bread is cut",
                "Add ingredients",
                "Add mustard and mayo",
                "Wrap the sandwich",
            ]
        );
    }

    #[test]
    fn test_vegan_only_changes_condiments() {
        let turkey = TurkeySandwich.make();
        let vegan = VeganSandwich.make();
        assert_eq!(vegan[2], "Add vegan mayo");
        assert_eq!(turkey[0], vegan[0]);
        assert_eq!(turkey[1], vegan[1]);
        assert_eq!(turkey[3], vegan[3]);
    }

    #[test]
    fn test_steps_can_be_overridden() {
        struct OpenFaced;
        impl Sandwich for OpenFaced {
            fn name(&self) -> &str {
                "open-faced"
            }
            fn add_condiments(&self) -> &'static str {
                "Add butter"
            }
            fn wrap(&self) -> &'static str {
                "Serve on a plate"
            }
        }

        assert_eq!(OpenFaced.make().last(), Some(&"Serve on a plate"));
    }
}
