use super::*;

const FLYER_LINES: [&str; 4] = [
    "PRESENTING",
    "ANNUAL DESIGN CONFERENCE",
    "FEATURING THE LATEST TRENDS IN TYPOGRAPHY",
    "JUNE 15-18, 2023",
];

/// Sample texts set in a single font.
pub fn font_preview(font: &CatalogFont) -> Markup {
    let family = font_family_style(&font.font);
    let [presenting, title, featuring, date] = FLYER_LINES;
    page(
        &format!("Font Preview: {}", font.font.name),
        None,
        Some(font_stylesheets([&font.font])),
        html! {
            main class="preview" {
                h1 { "Font Preview: " (font.font.name) }
                div class="preview-grid" {
                    div class="flyer-mock" style=(family) {
                        p class="presenting" { (presenting) }
                        h2 { (title) }
                        p class="featuring" { (featuring) }
                        p class="date" { (date) }
                    }
                    div class="samples" {
                        h3 { "Event Title" }
                        div class="sample-title" style=(family) { "Annual Design Conference" }
                        h3 { "Heading" }
                        div class="sample-heading" style=(family) { "Typography Workshop Sessions" }
                        h3 { "Body Text" }
                        div class="sample-body" {
                            "Join us for an immersive experience exploring the art and science of typography. "
                            "From classic serifs to modern sans, we'll dive deep into what makes great typography work."
                        }
                        @if !font.tags.is_empty() {
                            h3 { "Tags" }
                            ul class="tags" {
                                @for tag in &font.tags {
                                    li { (tag) }
                                }
                            }
                        }
                    }
                }
                a href="/admin" { "back" }
            }
        },
    )
}
