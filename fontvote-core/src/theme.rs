//! Round-trip of [`ThemeSettings`] through URL query parameters.
//!
//! Unknown or malformed values are ignored and the default
//! of the corresponding setting is kept.

use url::form_urlencoded;

use crate::entities::*;

pub const PARAM_FONT: &str = "font";
pub const PARAM_GRADIENT: &str = "gradient";
pub const PARAM_ASPECT_RATIO: &str = "aspectRatio";
pub const PARAM_ADD_PADDING: &str = "addPadding";

/// Raw, unvalidated query parameters.
#[derive(Debug, Clone, Default)]
pub struct ThemeParams<'a> {
    pub font: Option<&'a str>,
    pub gradient: Option<&'a str>,
    pub aspect_ratio: Option<&'a str>,
    pub add_padding: Option<&'a str>,
}

pub fn from_params(params: &ThemeParams) -> ThemeSettings {
    let defaults = ThemeSettings::default();
    let font = params
        .font
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(ToOwned::to_owned);
    let gradient = match params.gradient {
        Some(g) => g.parse().unwrap_or_else(|_| {
            log::debug!("Ignoring unknown gradient '{g}'");
            defaults.gradient
        }),
        None => defaults.gradient,
    };
    let aspect_ratio = match params.aspect_ratio {
        Some(r) => r.parse().unwrap_or_else(|_| {
            log::debug!("Ignoring unsupported aspect ratio '{r}'");
            defaults.aspect_ratio
        }),
        None => defaults.aspect_ratio,
    };
    let add_padding = params
        .add_padding
        .map(|p| p == "true")
        .unwrap_or(defaults.add_padding);
    ThemeSettings {
        font,
        gradient,
        aspect_ratio,
        add_padding,
    }
}

pub fn parse_query(query: &str) -> ThemeSettings {
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    // The last occurrence of a parameter wins
    let lookup = |key: &str| {
        pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    from_params(&ThemeParams {
        font: lookup(PARAM_FONT),
        gradient: lookup(PARAM_GRADIENT),
        aspect_ratio: lookup(PARAM_ASPECT_RATIO),
        add_padding: lookup(PARAM_ADD_PADDING),
    })
}

/// Serializes all settings, so that loading the resulting
/// query reproduces the same configuration.
pub fn to_query(settings: &ThemeSettings) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(font) = &settings.font {
        serializer.append_pair(PARAM_FONT, font);
    }
    serializer
        .append_pair(PARAM_GRADIENT, settings.gradient.id())
        .append_pair(PARAM_ASPECT_RATIO, settings.aspect_ratio.as_str())
        .append_pair(
            PARAM_ADD_PADDING,
            if settings.add_padding { "true" } else { "false" },
        );
    serializer.finish()
}

/// A change of a single setting.
#[derive(Debug, Clone)]
pub enum ThemeChange {
    Font(String),
    Gradient(Gradient),
    AspectRatio(AspectRatio),
    AddPadding(bool),
}

pub fn apply_change(settings: &ThemeSettings, change: ThemeChange) -> ThemeSettings {
    let mut changed = settings.clone();
    match change {
        ThemeChange::Font(font) => changed.font = Some(font),
        ThemeChange::Gradient(gradient) => changed.gradient = gradient,
        ThemeChange::AspectRatio(ratio) => changed.aspect_ratio = ratio,
        ThemeChange::AddPadding(add) => changed.add_padding = add,
    }
    changed
}
