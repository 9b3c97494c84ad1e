use gloo::utils::document;
use landing_theme_core::{RenderSurface, SurfaceError};
use web_sys::Element;

/// The `<html>` element, plus `<body>` for the transition hint.
pub struct DocumentSurface {
    root: Element,
}

impl DocumentSurface {
    pub fn from_document() -> Result<Self, SurfaceError> {
        let root = document()
            .document_element()
            .ok_or(SurfaceError::MissingRoot)?;
        Ok(Self { root })
    }
}

impl RenderSurface for DocumentSurface {
    fn attribute(&self, name: &str) -> Option<String> {
        self.root.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        log::trace!("{}={:?}", name, value);
        self.root.set_attribute(name, value).map_err(|err| {
            log::debug!("setAttribute({:?}) failed: {:?}", name, err);
            SurfaceError::AttributeRejected
        })
    }

    fn set_body_transition(&mut self, transition: &str) -> Result<(), SurfaceError> {
        // <body> does not exist yet while the script runs from <head>
        let body = document().body().ok_or(SurfaceError::MissingBody)?;
        body.style()
            .set_property("transition", transition)
            .map_err(|err| {
                log::debug!("body transition rejected: {:?}", err);
                SurfaceError::StyleRejected
            })
    }
}
