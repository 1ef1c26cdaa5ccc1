//! Ink-and-paper theme with dark and light variants.
//!
//! The theme is a single TOML file containing both variants; the session
//! toggle just switches which [`ColorScheme`] the renderer reads.

mod catalog;
mod colors;

// Re-export everything so `crate::theme::*` paths remain unchanged.
pub use catalog::*;
pub use colors::*;

use iced::Theme;

use senden_core::config::ThemeMode;

/// Embedded default theme TOML source (contains both dark and light).
pub(crate) const DEFAULT_THEME_TOML: &str = include_str!("../assets/themes/default.toml");

/// A fully loaded theme with both appearance variants.
#[derive(Debug, Clone)]
pub struct SendenTheme {
    pub name: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl SendenTheme {
    /// Load a theme from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let file: ThemeFile =
            toml::from_str(toml_str).map_err(|e| format!("theme parse error: {e}"))?;
        Ok(Self {
            name: file.meta.name.clone(),
            dark: ColorScheme::from_variant(&file.dark),
            light: ColorScheme::from_variant(&file.light),
        })
    }

    /// Load the embedded default theme.
    pub fn default_theme() -> Self {
        Self::from_toml(DEFAULT_THEME_TOML).expect("embedded default theme is valid TOML")
    }

    /// Get the color scheme for the current dark-mode flag.
    pub fn colors(&self, dark: bool) -> &ColorScheme {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }

    /// Build the iced Theme for the current dark-mode flag.
    pub fn iced_theme(&self, dark: bool) -> Theme {
        build_theme(self.colors(dark))
    }
}

/// Resolve the configured start mode to the initial dark flag.
pub fn resolve_dark(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Senden",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.success,
            warning: cs.warning,
            danger: cs.error,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_theme_parses() {
        let theme = SendenTheme::default_theme();
        assert_eq!(theme.name, "Default");
        // Dark and light variants genuinely differ.
        assert_ne!(theme.dark.surface, theme.light.surface);
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert!(resolve_dark(ThemeMode::Dark));
        assert!(!resolve_dark(ThemeMode::Light));
    }
}
