use super::*;
use crate::core::theme::{self, ThemeChange};

pub struct EventData {
    pub organizer: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub const EVENT_DATA: EventData = EventData {
    organizer: "Amoura",
    title: "Nick Morgan @ Unveiled",
    location: "Unveiled",
    description: "Amoura is taking over Unveiled to bring you Nick Morgan, \
        supported by NYC's beloved Alta Sounds and Fireware.",
};

const DEFAULT_FONT_FAMILY: &str = "system-ui, sans-serif";

fn event_href(settings: &ThemeSettings, change: ThemeChange) -> String {
    format!(
        "/event?{}",
        theme::to_query(&theme::apply_change(settings, change))
    )
}

fn option_class(active: bool) -> &'static str {
    if active {
        "option active"
    } else {
        "option"
    }
}

/// The example event flyer styled with the given settings.
pub fn event(settings: &ThemeSettings, fonts: &[&CatalogFont], date: &str) -> Markup {
    let font_family = settings
        .font
        .as_deref()
        .map(css_font_family)
        .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string());
    let (background, overlay) = match settings.gradient.kind() {
        GradientKind::Static(class) => (class, None),
        GradientKind::Dynamic(class) => ("bg-none", Some(class)),
    };
    let ratio = settings.aspect_ratio;
    let flyer_style = if settings.add_padding {
        format!(
            "aspect-ratio: {}; max-width: {:.2}%",
            ratio.as_str(),
            ratio.width_per_height() * 100.0
        )
    } else {
        format!("aspect-ratio: {}", ratio.as_str())
    };
    page(
        EVENT_DATA.title,
        None,
        Some(font_stylesheets(fonts.iter().map(|f| &f.font))),
        html! {
            div class=(format!("event {background}")) {
                @if let Some(overlay) = overlay {
                    div class=(format!("overlay {overlay}")) {
                        @for i in 0..24 {
                            span style=(format!("--i: {i}")) {}
                        }
                    }
                }
                main class="event-content" {
                    div class="flyer" style=(flyer_style) {
                        div class="flyer-inner" style=(format!("font-family: {font_family}")) {
                            p class="organizer" { (EVENT_DATA.organizer) }
                            h1 class="title" { (EVENT_DATA.title) }
                            p class="date" { (date) }
                            p class="location" { (EVENT_DATA.location) }
                        }
                    }
                    div class="details" style=(format!("font-family: {font_family}")) {
                        h2 { (EVENT_DATA.title) }
                        p class="meta" { (date) " · " (EVENT_DATA.location) }
                        p { (EVENT_DATA.description) }
                        p class="host" { "Hosted by " (EVENT_DATA.organizer) }
                    }
                }
                (theme_settings(settings, fonts))
            }
        },
    )
}

fn theme_settings(settings: &ThemeSettings, fonts: &[&CatalogFont]) -> Markup {
    html! {
        aside class="theme-settings" {
            h2 { "Theme" }
            h3 { "Font" }
            ul class="fonts" {
                @for font in fonts {
                    @let active = settings.font.as_deref() == Some(font.font.name.as_str());
                    li {
                        a class=(option_class(active))
                            style=(font_family_style(&font.font))
                            href=(event_href(settings, ThemeChange::Font(font.font.name.clone()))) {
                            (font.font.name)
                        }
                    }
                }
            }
            h3 { "Background" }
            ul class="gradients" {
                @for gradient in Gradient::all() {
                    li {
                        a class=(option_class(settings.gradient == gradient))
                            href=(event_href(settings, ThemeChange::Gradient(gradient))) {
                            (gradient.label())
                        }
                    }
                }
            }
            h3 { "Aspect ratio" }
            ul class="ratios" {
                @for ratio in AspectRatio::ALL {
                    li {
                        a class=(option_class(settings.aspect_ratio == ratio))
                            href=(event_href(settings, ThemeChange::AspectRatio(ratio))) {
                            (ratio.label())
                        }
                    }
                }
            }
            h3 { "Padding" }
            a class=(option_class(settings.add_padding))
                href=(event_href(settings, ThemeChange::AddPadding(!settings.add_padding))) {
                @if settings.add_padding { "remove padding" } @else { "add padding" }
            }
        }
    }
}
