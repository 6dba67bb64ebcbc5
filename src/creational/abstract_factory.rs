// Pattern 1: Creational Patterns - Abstract Factory
// A theme produces buttons that match it; callers only see the traits.

use crate::config::DemoConfig;
use crate::error::PatternError;

pub trait Button {
    fn create(&self) -> &'static str;
}

pub struct LightButton;

impl Button for LightButton {
    fn create(&self) -> &'static str {
        "Light button"
    }
}

pub struct DarkButton;

impl Button for DarkButton {
    fn create(&self) -> &'static str {
        "Dark button"
    }
}

pub trait Theme {
    fn create_button(&self) -> Box<dyn Button>;
}

pub struct LightTheme;

impl Theme for LightTheme {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }
}

pub struct DarkTheme;

impl Theme for DarkTheme {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

pub fn theme_for(kind: ThemeKind) -> Box<dyn Theme> {
    match kind {
        ThemeKind::Light => Box::new(LightTheme),
        ThemeKind::Dark => Box::new(DarkTheme),
    }
}

fn render(theme: &dyn Theme) -> &'static str {
    theme.create_button().create()
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    for kind in [ThemeKind::Light, ThemeKind::Dark] {
        println!("{kind:?} theme: {}", render(theme_for(kind).as_ref()));
    }
    Ok(())
}
