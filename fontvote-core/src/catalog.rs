//! The font catalog as presented to visitors and admins.

use std::collections::HashMap;

use itertools::Itertools as _;

use crate::entities::*;

/// A font together with the names of its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFont {
    pub font: Font,
    pub tags: Vec<String>,
}

impl CatalogFont {
    pub fn net_score(&self) -> i64 {
        self.font.net_score()
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    /// All `selected` names are tags of this font.
    pub fn has_all_tags<S: AsRef<str>>(&self, selected: &[S]) -> bool {
        selected.iter().all(|name| self.has_tag(name.as_ref()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    // In store order, i.e. ordered by id.
    fonts: Vec<CatalogFont>,
    tags: Vec<Tag>,
    font_tags: HashMap<FontId, Vec<TagId>>,
}

/// The ranked catalog split into the leading fonts and the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    pub top: Vec<&'a CatalogFont>,
    pub rest: Vec<&'a CatalogFont>,
}

impl Catalog {
    pub fn hydrate(fonts: Vec<Font>, tags: Vec<Tag>, font_tags: Vec<FontTag>) -> Self {
        let tag_names: HashMap<TagId, &str> =
            tags.iter().map(|t| (t.id, t.name.as_str())).collect();
        let font_tags: HashMap<FontId, Vec<TagId>> = font_tags
            .into_iter()
            .map(|ft| (ft.font_id, ft.tag_id))
            .into_group_map();
        let fonts = fonts
            .into_iter()
            .map(|font| {
                let tags = font_tags
                    .get(&font.id)
                    .into_iter()
                    .flatten()
                    .filter_map(|id| {
                        let name = tag_names.get(id);
                        if name.is_none() {
                            log::warn!("Font {} references unknown tag {}", font.id, id);
                        }
                        name.map(|n| (*n).to_owned())
                    })
                    .sorted()
                    .collect();
                CatalogFont { font, tags }
            })
            .collect();
        Self {
            fonts,
            tags,
            font_tags,
        }
    }

    pub fn fonts(&self) -> &[CatalogFont] {
        &self.fonts
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn get(&self, id: FontId) -> Option<&CatalogFont> {
        self.fonts.iter().find(|f| f.font.id == id)
    }

    pub fn tag_ids_of(&self, id: FontId) -> &[TagId] {
        self.font_tags.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Descending by net score. Fonts with an equal score
    /// keep their store order.
    pub fn ranked(&self) -> Vec<&CatalogFont> {
        let mut ranked: Vec<_> = self.fonts.iter().collect();
        ranked.sort_by(|a, b| b.net_score().cmp(&a.net_score()));
        ranked
    }

    /// Ranked fonts that carry every selected tag.
    ///
    /// An empty selection returns the complete ranked list.
    pub fn filter_by_tags<S: AsRef<str>>(&self, selected: &[S]) -> Vec<&CatalogFont> {
        self.ranked()
            .into_iter()
            .filter(|f| f.has_all_tags(selected))
            .collect()
    }

    /// All fonts ordered by name.
    pub fn by_name(&self) -> Vec<&CatalogFont> {
        self.fonts
            .iter()
            .sorted_by(|a, b| a.font.name.cmp(&b.font.name))
            .collect()
    }

    /// All fonts ordered by upvotes, most upvoted first.
    pub fn by_upvotes(&self) -> Vec<&CatalogFont> {
        self.fonts
            .iter()
            .sorted_by(|a, b| b.font.upvotes.cmp(&a.font.upvotes))
            .collect()
    }
}

/// The first `top_count` fonts form the top section.
pub fn sections<'a>(ranked: Vec<&'a CatalogFont>, top_count: usize) -> Sections<'a> {
    let mut top = ranked;
    let rest = top.split_off(top_count.min(top.len()));
    Sections { top, rest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontvote_entities::builders::*;

    fn font(id: i64, name: &str, up: u64, down: u64) -> Font {
        Font::build()
            .id(id)
            .name(name)
            .upvotes(up)
            .downvotes(down)
            .finish()
    }

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id: TagId::new(id),
            name: name.into(),
        }
    }

    fn font_tag(font_id: i64, tag_id: i64) -> FontTag {
        FontTag {
            font_id: FontId::new(font_id),
            tag_id: TagId::new(tag_id),
        }
    }

    fn names<'a>(fonts: &[&'a CatalogFont]) -> Vec<&'a str> {
        fonts.iter().map(|f| f.font.name.as_str()).collect()
    }

    fn sample() -> Catalog {
        Catalog::hydrate(
            vec![
                font(1, "B", 3, 0),
                font(2, "A", 5, 1),
                font(3, "C", 3, 0),
                font(4, "D", 0, 2),
            ],
            vec![tag(10, "Display"), tag(11, "Serif"), tag(12, "Sans")],
            vec![
                font_tag(1, 11),
                font_tag(2, 11),
                font_tag(2, 10),
                font_tag(3, 10),
                font_tag(4, 12),
                font_tag(4, 11),
                font_tag(4, 10),
            ],
        )
    }

    #[test]
    fn hydrate_tag_names() {
        let catalog = sample();
        let a = catalog.get(FontId::new(2)).unwrap();
        assert_eq!(a.tags, vec!["Display", "Serif"]);
        assert_eq!(catalog.get(FontId::new(3)).unwrap().tags, vec!["Display"]);
        assert_eq!(catalog.tag_ids_of(FontId::new(1)), &[TagId::new(11)]);
        assert!(catalog.tag_ids_of(FontId::new(99)).is_empty());
    }

    #[test]
    fn font_without_tags() {
        let catalog = Catalog::hydrate(vec![font(1, "X", 0, 0)], vec![], vec![]);
        assert!(catalog.get(FontId::new(1)).unwrap().tags.is_empty());
    }

    #[test]
    fn rank_by_net_score_descending() {
        let catalog = sample();
        // A(5,1) has net 4 and ranks before B(3,0) with net 3
        assert_eq!(names(&catalog.ranked()), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn equal_scores_keep_store_order() {
        let catalog = Catalog::hydrate(
            vec![font(7, "Z", 1, 0), font(8, "Y", 1, 0), font(9, "X", 1, 0)],
            vec![],
            vec![],
        );
        assert_eq!(names(&catalog.ranked()), vec!["Z", "Y", "X"]);
    }

    #[test]
    fn filter_with_and_semantics() {
        let catalog = sample();
        let filtered = catalog.filter_by_tags(&["Serif", "Display"]);
        assert_eq!(names(&filtered), vec!["A", "D"]);
        for f in filtered {
            assert!(f.has_tag("Serif") && f.has_tag("Display"));
        }
    }

    #[test]
    fn empty_filter_returns_ranked_list() {
        let catalog = sample();
        let none: [&str; 0] = [];
        assert_eq!(catalog.filter_by_tags(&none), catalog.ranked());
    }

    #[test]
    fn filter_with_unknown_tag_returns_nothing() {
        let catalog = sample();
        assert!(catalog.filter_by_tags(&["Mono"]).is_empty());
    }

    #[test]
    fn split_into_sections() {
        let catalog = sample();
        let s = sections(catalog.ranked(), 2);
        assert_eq!(names(&s.top), vec!["A", "B"]);
        assert_eq!(names(&s.rest), vec!["C", "D"]);

        let s = sections(catalog.ranked(), 10);
        assert_eq!(s.top.len(), 4);
        assert!(s.rest.is_empty());
    }

    #[test]
    fn admin_and_event_orderings() {
        let catalog = sample();
        assert_eq!(names(&catalog.by_name()), vec!["A", "B", "C", "D"]);
        assert_eq!(names(&catalog.by_upvotes()), vec!["A", "B", "C", "D"]);
    }
}
