//! Semantic color tokens, deserializable from TOML theme files via hex
//! color strings.

use iced::Color;
use serde::Deserialize;

// ── Hex color serde ─────────────────────────────────────────────────

#[allow(dead_code)]
mod hex_color {
    use iced::Color;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let r = (color.r * 255.0) as u8;
        let g = (color.g * 255.0) as u8;
        let b = (color.b * 255.0) as u8;
        if (color.a - 1.0).abs() < f32::EPSILON {
            serializer.serialize_str(&format!("#{r:02X}{g:02X}{b:02X}"))
        } else {
            let a = (color.a * 255.0) as u8;
            serializer.serialize_str(&format!("#{r:02X}{g:02X}{b:02X}{a:02X}"))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    fn parse_hex_color(s: &str) -> Result<Color, String> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|e| e.to_string())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|e| e.to_string())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|e| e.to_string())?;
                Ok(Color::from_rgb8(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|e| e.to_string())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|e| e.to_string())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|e| e.to_string())?;
                let a = u8::from_str_radix(&hex[6..8], 16).map_err(|e| e.to_string())?;
                Ok(Color::from_rgba8(r, g, b, a as f32 / 255.0))
            }
            _ => Err(format!("invalid hex color: {s}")),
        }
    }
}

// ── TOML intermediate structs ──────────────────────────────────────

/// Raw TOML theme file: one theme, both appearance variants.
#[derive(Debug, Deserialize)]
pub struct ThemeFile {
    pub meta: ThemeMeta,
    pub dark: ThemeVariant,
    pub light: ThemeVariant,
}

#[derive(Debug, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
}

/// A single appearance variant (dark or light) within a theme.
#[derive(Debug, Deserialize)]
pub struct ThemeVariant {
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub primary: PrimaryColors,
    pub error: ErrorColors,
    pub status: StatusColors,
    pub overlay: OverlayColors,
}

#[derive(Debug, Deserialize)]
pub struct SurfaceColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub container_low: Color,
    #[serde(with = "hex_color")]
    pub container: Color,
    #[serde(with = "hex_color")]
    pub bright: Color,
}

#[derive(Debug, Deserialize)]
pub struct TextColors {
    #[serde(with = "hex_color")]
    pub on_surface: Color,
    #[serde(with = "hex_color")]
    pub on_surface_variant: Color,
    #[serde(with = "hex_color")]
    pub outline: Color,
    #[serde(with = "hex_color")]
    pub outline_variant: Color,
}

#[derive(Debug, Deserialize)]
pub struct PrimaryColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub hover: Color,
    #[serde(with = "hex_color")]
    pub dim: Color,
    #[serde(with = "hex_color")]
    pub on_primary: Color,
}

#[derive(Debug, Deserialize)]
pub struct ErrorColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub on_error: Color,
}

#[derive(Debug, Deserialize)]
pub struct StatusColors {
    #[serde(with = "hex_color")]
    pub success: Color,
    #[serde(with = "hex_color")]
    pub warning: Color,
}

#[derive(Debug, Deserialize)]
pub struct OverlayColors {
    #[serde(with = "hex_color")]
    pub modal_backdrop: Color,
}

// ── ColorScheme ────────────────────────────────────────────────────

/// All semantic color tokens used by the renderer.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces (low -> high elevation)
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,

    // Error
    pub error: Color,
    pub on_error: Color,

    // Status
    pub success: Color,
    pub warning: Color,

    // Overlay
    pub modal_backdrop: Color,
}

impl ColorScheme {
    /// Build a ColorScheme from a single theme variant.
    pub fn from_variant(v: &ThemeVariant) -> Self {
        Self {
            surface: v.surface.base,
            surface_container_low: v.surface.container_low,
            surface_container: v.surface.container,
            surface_bright: v.surface.bright,

            on_surface: v.text.on_surface,
            on_surface_variant: v.text.on_surface_variant,
            outline: v.text.outline,
            outline_variant: v.text.outline_variant,

            primary: v.primary.base,
            primary_hover: v.primary.hover,
            primary_dim: v.primary.dim,
            on_primary: v.primary.on_primary,

            error: v.error.base,
            on_error: v.error.on_error,

            success: v.status.success,
            warning: v.status.warning,

            modal_backdrop: v.overlay.modal_backdrop,
        }
    }
}
