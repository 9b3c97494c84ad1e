use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::*;

/// Eases the palette swap instead of letting it snap.
pub const THEME_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";

/// Everything the page needs to render a [`Theme`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub attr_name: &'static str,
    pub attr_value: &'static str,
    pub body_transition: Option<&'static str>,
}

impl Presentation {
    pub const fn of(theme: Theme) -> Self {
        Self {
            attr_name: Theme::ATTR_NAME,
            attr_value: theme.scheme(),
            body_transition: None,
        }
    }

    pub const fn with_transition(self) -> Self {
        Self {
            body_transition: Some(THEME_TRANSITION),
            ..self
        }
    }
}

/// The document-wide node stylesheets select the palette on.
pub trait RenderSurface {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), SurfaceError>;
    fn set_body_transition(&mut self, transition: &str) -> Result<(), SurfaceError>;

    fn present(&mut self, presentation: &Presentation) -> Result<(), SurfaceError> {
        self.set_attribute(presentation.attr_name, presentation.attr_value)?;
        if let Some(transition) = presentation.body_transition {
            self.set_body_transition(transition)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySurface {
    attributes: BTreeMap<String, String>,
    body_transition: Option<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn theme_attr(&self) -> Option<&str> {
        self.attributes.get(Theme::ATTR_NAME).map(String::as_str)
    }

    pub fn body_transition(&self) -> Option<&str> {
        self.body_transition.as_deref()
    }
}

impl RenderSurface for MemorySurface {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_body_transition(&mut self, transition: &str) -> Result<(), SurfaceError> {
        self.body_transition = Some(transition.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_mirrors_scheme_on_data_theme() {
        for theme in Theme::ALL {
            let presentation = Presentation::of(theme);
            assert_eq!(presentation.attr_name, "data-theme");
            assert_eq!(presentation.attr_value, theme.scheme());
            assert_eq!(presentation.body_transition, None);
        }
    }

    #[test]
    fn present_applies_transition_only_when_requested() {
        let mut surface = MemorySurface::new();
        surface.present(&Presentation::of(Theme::Dark)).unwrap();
        assert_eq!(surface.theme_attr(), Some("dark"));
        assert_eq!(surface.body_transition(), None);

        surface
            .present(&Presentation::of(Theme::Light).with_transition())
            .unwrap();
        assert_eq!(surface.theme_attr(), Some("light"));
        assert_eq!(surface.body_transition(), Some(THEME_TRANSITION));
    }
}
