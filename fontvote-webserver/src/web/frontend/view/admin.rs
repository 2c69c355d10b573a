use super::*;

pub fn admin_login(flash: Option<FlashMessage>) -> Markup {
    page(
        "Font Vote Admin",
        flash,
        None,
        html! {
            div class="login" {
                h2 { "Admin Login" }
                form action="/admin/login" method="POST" {
                    fieldset {
                        label {
                            "Password:"
                            br;
                            input type="password" name="password" required;
                        }
                        br;
                        input class="btn" type="submit" value="login";
                    }
                }
            }
        },
    )
}

pub fn admin_console(
    catalog: &Catalog,
    editing: Option<&CatalogFont>,
    flash: Option<FlashMessage>,
) -> Markup {
    page(
        "Font Vote Admin",
        flash,
        Some(font_stylesheets(catalog.fonts().iter().map(|f| &f.font))),
        html! {
            main class="admin" {
                h1 { "Admin" }
                form class="logout" action="/admin/logout" method="POST" {
                    input class="btn" type="submit" value="logout";
                }
                @if let Some(font) = editing {
                    (tag_editor(font, catalog.tag_ids_of(font.font.id), catalog.tags()))
                }
                section class="tags" {
                    h2 { "Tags" }
                    ul class="tags" {
                        @for tag in catalog.tags() {
                            li { (tag.name) }
                        }
                    }
                    form action="/admin/tags" method="POST" {
                        input type="text" name="name" placeholder="New tag" required;
                        input class="btn" type="submit" value="create tag";
                    }
                }
                section class="fonts" {
                    h2 { "Fonts" }
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Score" }
                                th { "Tags" }
                                th {}
                            }
                        }
                        tbody {
                            @for font in catalog.by_name() {
                                tr {
                                    td style=(font_family_style(&font.font)) { (font.font.name) }
                                    td { (font.net_score()) " (+" (font.font.upvotes) " / -" (font.font.downvotes) ")" }
                                    td { (font.tags.join(", ")) }
                                    td {
                                        a href=(format!("/admin?edit={}", font.font.id)) { "edit tags" }
                                        " "
                                        a href=(format!("/admin/fonts/{}/preview", font.font.id)) { "preview" }
                                    }
                                }
                            }
                        }
                    }
                    h3 { "Add a font" }
                    form action="/admin/fonts" method="POST" {
                        input type="text" name="name" placeholder="Name" required;
                        input type="url" name="url" placeholder="Stylesheet URL" required;
                        input class="btn" type="submit" value="add font";
                    }
                }
            }
        },
    )
}

fn tag_editor(font: &CatalogFont, checked: &[TagId], tags: &[Tag]) -> Markup {
    html! {
        section class="tag-editor" {
            h2 { "Tags of " (font.font.name) }
            form action=(format!("/admin/fonts/{}/tags", font.font.id)) method="POST" {
                @for tag in tags {
                    label {
                        @if checked.contains(&tag.id) {
                            input type="checkbox" name="tags" value=(tag.id.get()) checked;
                        } @else {
                            input type="checkbox" name="tags" value=(tag.id.get());
                        }
                        (tag.name)
                    }
                }
                br;
                input class="btn" type="submit" value="save";
                a href="/admin" { "cancel" }
            }
        }
    }
}
