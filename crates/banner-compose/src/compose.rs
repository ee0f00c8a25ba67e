use banner_core::fields::FieldSet;
use banner_presets::{LayoutKind, Preset};

use crate::tree::{BannerTree, FooterAlign, FooterRow, MetaBlock, MetaEntry, TitleBlock};

/// Compose a banner tree from a preset and the current field set.
///
/// Pure and deterministic: same inputs always yield a structurally equal
/// tree. No measurement happens here — pixel placement belongs to the
/// renderer.
pub fn compose(preset: &Preset, fields: &FieldSet) -> BannerTree {
    let title = title_block(fields);
    match preset.layout {
        LayoutKind::Center => BannerTree {
            layout: LayoutKind::Center,
            title,
            meta: center_meta(fields),
            // Never a footer in center layout, regardless of the flags.
            footer: None,
        },
        LayoutKind::Stack => BannerTree {
            layout: LayoutKind::Stack,
            title,
            meta: side_meta(fields).map(|entries| MetaBlock::List { entries }),
            footer: footer_row(fields),
        },
        LayoutKind::Split => BannerTree {
            layout: LayoutKind::Split,
            title,
            meta: side_meta(fields).map(|entries| MetaBlock::Grid { entries }),
            footer: footer_row(fields),
        },
    }
}

/// Name/headline/tagline per their flags. Empty strings are kept: a shown
/// field with a blank value is "present but blank".
fn title_block(fields: &FieldSet) -> Option<TitleBlock> {
    let block = TitleBlock {
        name: fields.show_name.then(|| fields.name.clone()),
        headline: fields.show_headline.then(|| fields.headline.clone()),
        tagline: fields.show_tagline.then(|| fields.tagline.clone()),
    };
    (!block.is_empty()).then_some(block)
}

/// Center layout meta: fixed order [company, location, website, email,
/// phone], dropping fields whose flag is off or whose value is blank after
/// trimming — blanks would otherwise produce stray separators.
fn center_meta(fields: &FieldSet) -> Option<MetaBlock> {
    let candidates = [
        (fields.show_company, &fields.company),
        (fields.show_location, &fields.location),
        (fields.show_website, &fields.website),
        (fields.show_email, &fields.email),
        (fields.show_phone, &fields.phone),
    ];
    let items: Vec<String> = candidates
        .into_iter()
        .filter(|(shown, value)| *shown && !value.trim().is_empty())
        .map(|(_, value)| value.clone())
        .collect();
    (!items.is_empty()).then_some(MetaBlock::Inline { items })
}

/// Stack/split meta: fixed order [company, location, email, phone].
/// Website is excluded — it is reserved for the footer row. Blank values
/// stay, matching the present-but-blank policy.
fn side_meta(fields: &FieldSet) -> Option<Vec<MetaEntry>> {
    let candidates = [
        (fields.show_company, "Company", &fields.company),
        (fields.show_location, "Location", &fields.location),
        (fields.show_email, "Email", &fields.email),
        (fields.show_phone, "Phone", &fields.phone),
    ];
    let entries: Vec<MetaEntry> = candidates
        .into_iter()
        .filter(|(shown, _, _)| *shown)
        .map(|(_, label, value)| MetaEntry {
            label,
            value: value.clone(),
        })
        .collect();
    (!entries.is_empty()).then_some(entries)
}

/// Footer for stack/split: present iff the branding flag or the website
/// flag is set. Both → justified to opposite edges; website only → right;
/// branding only → left.
fn footer_row(fields: &FieldSet) -> Option<FooterRow> {
    let align = match (fields.show_footer, fields.show_website) {
        (true, true) => FooterAlign::Between,
        (false, true) => FooterAlign::End,
        (true, false) => FooterAlign::Start,
        (false, false) => return None,
    };
    Some(FooterRow {
        align,
        brand: fields.show_footer,
        website: fields.show_website.then(|| fields.website.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use banner_core::fields::Toggle;
    use banner_presets::PresetCatalog;

    fn catalog() -> PresetCatalog {
        PresetCatalog::load().unwrap()
    }

    fn preset_with_layout(catalog: &PresetCatalog, layout: LayoutKind) -> &Preset {
        catalog
            .presets()
            .iter()
            .find(|p| p.layout == layout)
            .expect("catalog covers every layout")
    }

    fn all_hidden() -> FieldSet {
        let mut fields = FieldSet::default();
        for flag in Toggle::ALL {
            if fields.shown(flag) {
                fields.toggle(flag);
            }
        }
        fields
    }

    #[test]
    fn compose_is_deterministic_across_all_presets() {
        let catalog = catalog();
        let fields = FieldSet::default();
        for preset in catalog.presets() {
            let a = compose(preset, &fields);
            let b = compose(preset, &fields);
            assert_eq!(a, b, "preset {}", preset.id);
        }
    }

    #[test]
    fn default_fields_populate_every_block() {
        let catalog = catalog();
        let fields = FieldSet::default();

        let stack = compose(preset_with_layout(&catalog, LayoutKind::Stack), &fields);
        assert!(stack.title.is_some());
        assert!(matches!(stack.meta, Some(MetaBlock::List { .. })));
        assert!(stack.footer.is_some());

        let split = compose(preset_with_layout(&catalog, LayoutKind::Split), &fields);
        assert!(matches!(split.meta, Some(MetaBlock::Grid { .. })));

        let center = compose(preset_with_layout(&catalog, LayoutKind::Center), &fields);
        assert!(matches!(center.meta, Some(MetaBlock::Inline { .. })));
        assert!(center.footer.is_none());
    }

    #[test]
    fn all_flags_off_yields_empty_tree() {
        let catalog = catalog();
        let fields = all_hidden();
        for preset in catalog.presets() {
            let tree = compose(preset, &fields);
            assert!(tree.title.is_none());
            assert!(tree.meta.is_none());
            assert!(tree.footer.is_none());
        }
    }

    #[test]
    fn toggling_name_off_removes_only_the_name() {
        let catalog = catalog();
        let mut fields = FieldSet::default();
        fields.toggle(Toggle::Name);
        for preset in catalog.presets() {
            let tree = compose(preset, &fields);
            let title = tree.title.expect("headline and tagline still shown");
            assert!(title.name.is_none());
            assert_eq!(title.headline.as_deref(), Some("Product Strategist"));
            assert!(title.tagline.is_some());
        }
    }

    #[test]
    fn title_block_absent_when_its_three_flags_are_off() {
        let catalog = catalog();
        let mut fields = FieldSet::default();
        fields.toggle(Toggle::Name);
        fields.toggle(Toggle::Headline);
        fields.toggle(Toggle::Tagline);
        for preset in catalog.presets() {
            let tree = compose(preset, &fields);
            assert!(tree.title.is_none(), "preset {}", preset.id);
            // Meta and footer are untouched by the title flags.
            assert!(tree.meta.is_some());
        }
    }

    #[test]
    fn blank_shown_title_field_stays_present() {
        let catalog = catalog();
        let mut fields = FieldSet::default();
        fields.name.clear();
        let tree = compose(preset_with_layout(&catalog, LayoutKind::Stack), &fields);
        assert_eq!(tree.title.unwrap().name.as_deref(), Some(""));
    }

    // ── Center layout ──

    #[test]
    fn center_meta_fixed_order_and_website_included() {
        let catalog = catalog();
        let mut fields = FieldSet::default();
        fields.toggle(Toggle::Phone); // show phone too
        let tree = compose(preset_with_layout(&catalog, LayoutKind::Center), &fields);
        let Some(MetaBlock::Inline { items }) = tree.meta else {
            panic!("expected inline meta");
        };
        assert_eq!(
            items,
            vec![
                "Northwind Labs",
                "Seattle, WA",
                "jordankim.com",
                "hello@jordankim.com",
                "+1 (415) 555-0132",
            ]
        );
    }

    #[test]
    fn center_meta_drops_blank_values_after_trim() {
        let catalog = catalog();
        let mut fields = all_hidden();
        fields.company = "Acme".into();
        fields.location = "   ".into(); // whitespace-only: dropped
        fields.toggle(Toggle::Company);
        fields.toggle(Toggle::Location);

        let tree = compose(preset_with_layout(&catalog, LayoutKind::Center), &fields);
        let Some(MetaBlock::Inline { items }) = tree.meta else {
            panic!("expected inline meta");
        };
        assert_eq!(items, vec!["Acme"]);
    }

    #[test]
    fn center_never_renders_a_footer() {
        let catalog = catalog();
        let fields = FieldSet::default();
        assert!(fields.show_footer && fields.show_website);
        let tree = compose(preset_with_layout(&catalog, LayoutKind::Center), &fields);
        assert!(tree.footer.is_none());
    }

    // ── Stack / split meta ──

    #[test]
    fn side_meta_excludes_website_and_keeps_blanks() {
        let catalog = catalog();
        let mut fields = FieldSet::default();
        fields.email.clear();
        let tree = compose(preset_with_layout(&catalog, LayoutKind::Stack), &fields);
        let Some(MetaBlock::List { entries }) = tree.meta else {
            panic!("expected list meta");
        };
        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Company", "Location", "Email"]);
        assert_eq!(entries[2].value, "", "blank email stays present");
        assert!(!labels.contains(&"Website"), "website is footer-only here");
    }

    #[test]
    fn split_meta_is_a_grid_with_same_entries_as_stack_list() {
        let catalog = catalog();
        let fields = FieldSet::default();
        let stack = compose(preset_with_layout(&catalog, LayoutKind::Stack), &fields);
        let split = compose(preset_with_layout(&catalog, LayoutKind::Split), &fields);
        let Some(MetaBlock::List { entries: list }) = stack.meta else {
            panic!("expected list");
        };
        let Some(MetaBlock::Grid { entries: grid }) = split.meta else {
            panic!("expected grid");
        };
        assert_eq!(list, grid);
    }

    // ── Footer alignment table ──

    #[test]
    fn footer_alignment_table() {
        let catalog = catalog();
        let preset = preset_with_layout(&catalog, LayoutKind::Stack);

        let mut fields = FieldSet::default(); // footer=true, website=true
        let footer = compose(preset, &fields).footer.unwrap();
        assert_eq!(footer.align, FooterAlign::Between);
        assert!(footer.brand);
        assert_eq!(footer.website.as_deref(), Some("jordankim.com"));

        fields.toggle(Toggle::Footer); // footer=false, website=true
        let footer = compose(preset, &fields).footer.unwrap();
        assert_eq!(footer.align, FooterAlign::End);
        assert!(!footer.brand);
        assert!(footer.website.is_some());

        fields.toggle(Toggle::Footer);
        fields.toggle(Toggle::Website); // footer=true, website=false
        let footer = compose(preset, &fields).footer.unwrap();
        assert_eq!(footer.align, FooterAlign::Start);
        assert!(footer.brand);
        assert!(footer.website.is_none());

        fields.toggle(Toggle::Footer); // both false
        assert!(compose(preset, &fields).footer.is_none());
    }

    #[test]
    fn footer_table_matches_on_split_too() {
        let catalog = catalog();
        let preset = preset_with_layout(&catalog, LayoutKind::Split);
        let mut fields = FieldSet::default();
        fields.toggle(Toggle::Footer);
        let footer = compose(preset, &fields).footer.unwrap();
        assert_eq!(footer.align, FooterAlign::End);
    }
}
