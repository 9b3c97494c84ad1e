use crate::*;

/// Authoritative owner of the page theme.
///
/// Keeps the persisted preference and the render surface in sync with the
/// in-memory [`Theme`]. Neither storage nor surface failures escape: the page
/// always ends up showing a valid theme, persisted or not.
#[derive(Debug)]
pub struct ThemeStore<S, R> {
    theme: Theme,
    storage: S,
    surface: R,
}

impl<S: PreferenceStorage, R: RenderSurface> ThemeStore<S, R> {
    pub fn initialize(storage: S, surface: R) -> Self {
        let theme = Theme::load_or_default(&storage);
        let mut store = Self {
            theme,
            storage,
            surface,
        };
        store.present(Presentation::of(theme));
        store
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.shown_theme().toggled();
        self.theme = next;
        self.present(Presentation::of(next).with_transition());
        if let Err(err) = next.save(&mut self.storage) {
            log::warn!("theme {} only applies to this page view: {}", next, err);
        }
        next
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// The theme currently on the surface, if another writer changed it.
    fn shown_theme(&self) -> Theme {
        let shown = self
            .surface
            .attribute(Theme::ATTR_NAME)
            .and_then(|scheme| scheme.parse::<Theme>().ok());
        match shown {
            Some(shown) if shown != self.theme => {
                log::debug!("surface shows {} instead of {}, adopting it", shown, self.theme);
                shown
            }
            _ => self.theme,
        }
    }

    fn present(&mut self, presentation: Presentation) {
        log::debug!("theme-scheme: {}", presentation.attr_value);
        if let Err(err) = self.surface.present(&presentation) {
            log::error!("failed to set theme: {}", err);
        }
    }
}
