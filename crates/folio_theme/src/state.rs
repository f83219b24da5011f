//! Theme state
//!
//! Holds the active [`ColorScheme`] plus any color overrides. Persisting the
//! preference and applying it to the page are separate operations so either
//! can be exercised alone; [`ThemeState::toggle`] does both.

use crate::presentation::{PresentationLayer, DARK_CLASS};
use crate::scheme::ColorScheme;
use crate::store::KeyValueStore;
use crate::tokens::{Color, ColorToken, ColorTokens};
use folio_core::Result;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Storage key for the persisted preference
pub const THEME_KEY: &str = "theme";

/// Active theme and overrides
#[derive(Clone, Debug, Default)]
pub struct ThemeState {
    scheme: ColorScheme,
    color_overrides: FxHashMap<ColorToken, Color>,
}

impl ThemeState {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            color_overrides: FxHashMap::default(),
        }
    }

    /// Resolve the initial scheme.
    ///
    /// Dark when the stored preference is `"dark"`, or when nothing is stored
    /// and the system prefers dark. Any other stored value means light.
    pub fn load(store: &dyn KeyValueStore, prefers_dark: bool) -> Self {
        let saved = store.get(THEME_KEY);
        let dark = match saved.as_deref() {
            Some("dark") => true,
            Some("light") => false,
            Some(other) => {
                tracing::debug!("ThemeState::load - ignoring stored theme {:?}", other);
                false
            }
            None => prefers_dark,
        };

        let scheme = if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        tracing::debug!(
            "ThemeState::load - saved={:?} prefers_dark={} -> {}",
            saved,
            prefers_dark,
            scheme
        );
        Self::new(scheme)
    }

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    /// Set the color scheme. Returns true if it changed.
    pub fn set_scheme(&mut self, scheme: ColorScheme) -> bool {
        if self.scheme == scheme {
            return false;
        }
        tracing::debug!(
            "ThemeState::set_scheme - switching from {} to {}",
            self.scheme,
            scheme
        );
        self.scheme = scheme;
        true
    }

    /// Flip between light and dark without side effects
    pub fn toggle_scheme(&mut self) -> ColorScheme {
        self.set_scheme(self.scheme.toggle());
        self.scheme
    }

    /// Write the current scheme to the store
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(THEME_KEY, self.scheme.as_str())
    }

    /// Reflect the current scheme on the presentation layer
    pub fn apply(&self, layer: &mut dyn PresentationLayer) {
        if self.is_dark() {
            layer.add_class(DARK_CLASS);
        } else {
            layer.remove_class(DARK_CLASS);
        }
    }

    /// Flip the scheme, apply it, and persist it
    pub fn toggle(
        &mut self,
        store: &mut dyn KeyValueStore,
        layer: &mut dyn PresentationLayer,
    ) -> Result<ColorScheme> {
        let scheme = self.toggle_scheme();
        self.apply(layer);
        self.persist(store)?;
        Ok(scheme)
    }

    /// Accessible label for the toggle button
    pub fn toggle_label(&self) -> &'static str {
        "Toggle Dark Mode"
    }

    /// Icon shown on the toggle: the scheme a click switches to
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_dark() {
            "sun"
        } else {
            "moon"
        }
    }

    // ========== Color Access ==========

    /// Tokens for the current scheme, without overrides
    pub fn colors(&self) -> ColorTokens {
        match self.scheme {
            ColorScheme::Light => ColorTokens::light(),
            ColorScheme::Dark => ColorTokens::dark(),
        }
    }

    /// Get a color token value (checks override first)
    pub fn color(&self, token: ColorToken) -> Color {
        if let Some(color) = self.color_overrides.get(&token) {
            return *color;
        }
        self.colors().get(token)
    }

    pub fn set_color_override(&mut self, token: ColorToken, color: Color) {
        self.color_overrides.insert(token, color);
    }

    pub fn remove_color_override(&mut self, token: ColorToken) {
        self.color_overrides.remove(&token);
    }

    pub fn clear_overrides(&mut self) {
        self.color_overrides.clear();
    }

    /// CSS variables (name without `--` -> value) for every color token
    pub fn to_css_variable_map(&self) -> BTreeMap<String, String> {
        ColorToken::ALL
            .iter()
            .map(|token| (token.css_name().to_string(), self.color(*token).to_css()))
            .collect()
    }

    /// `:root { --name: value; ... }` stylesheet block
    pub fn to_css_root_block(&self) -> String {
        let mut css = String::from(":root {");
        for (name, value) in self.to_css_variable_map() {
            css.push_str(&format!(" --{}: {};", name, value));
        }
        css.push_str(" }");
        css
    }
}
