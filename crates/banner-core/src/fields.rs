/// The user-editable record describing one banner's content: eight text
/// fields plus one visibility flag per displayable field and a footer flag.
///
/// The record shape is fixed. Fields are patched individually on each edit
/// and replaced wholesale by [`FieldSet::reset`]; nothing is ever deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    pub name: String,
    pub headline: String,
    pub company: String,
    pub location: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub tagline: String,

    pub show_name: bool,
    pub show_headline: bool,
    pub show_company: bool,
    pub show_location: bool,
    pub show_website: bool,
    pub show_tagline: bool,
    pub show_email: bool,
    pub show_phone: bool,
    pub show_footer: bool,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self {
            name: "Jordan Kim".into(),
            headline: "Product Strategist".into(),
            company: "Northwind Labs".into(),
            location: "Seattle, WA".into(),
            website: "jordankim.com".into(),
            email: "hello@jordankim.com".into(),
            phone: "+1 (415) 555-0132".into(),
            tagline: "Designing calm, human-first product journeys that compound over time."
                .into(),
            show_name: true,
            show_headline: true,
            show_company: true,
            show_location: true,
            show_website: true,
            show_tagline: true,
            show_email: true,
            show_phone: false,
            show_footer: true,
        }
    }
}

impl FieldSet {
    /// Replace every field and flag with the documented default record.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Headline => &self.headline,
            TextField::Company => &self.company,
            TextField::Location => &self.location,
            TextField::Website => &self.website,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Tagline => &self.tagline,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Headline => &mut self.headline,
            TextField::Company => &mut self.company,
            TextField::Location => &mut self.location,
            TextField::Website => &mut self.website,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Tagline => &mut self.tagline,
        }
    }

    pub fn shown(&self, flag: Toggle) -> bool {
        match flag {
            Toggle::Name => self.show_name,
            Toggle::Headline => self.show_headline,
            Toggle::Company => self.show_company,
            Toggle::Location => self.show_location,
            Toggle::Website => self.show_website,
            Toggle::Tagline => self.show_tagline,
            Toggle::Email => self.show_email,
            Toggle::Phone => self.show_phone,
            Toggle::Footer => self.show_footer,
        }
    }

    /// Flip a visibility flag. Returns the new value.
    pub fn toggle(&mut self, flag: Toggle) -> bool {
        let slot = match flag {
            Toggle::Name => &mut self.show_name,
            Toggle::Headline => &mut self.show_headline,
            Toggle::Company => &mut self.show_company,
            Toggle::Location => &mut self.show_location,
            Toggle::Website => &mut self.show_website,
            Toggle::Tagline => &mut self.show_tagline,
            Toggle::Email => &mut self.show_email,
            Toggle::Phone => &mut self.show_phone,
            Toggle::Footer => &mut self.show_footer,
        };
        *slot = !*slot;
        *slot
    }
}

/// The eight free-text fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Headline,
    Company,
    Location,
    Website,
    Email,
    Phone,
    Tagline,
}

impl TextField {
    pub const ALL: [TextField; 8] = [
        TextField::Name,
        TextField::Headline,
        TextField::Company,
        TextField::Location,
        TextField::Website,
        TextField::Email,
        TextField::Phone,
        TextField::Tagline,
    ];

    /// Form label / console key for this field.
    pub fn key(self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Headline => "headline",
            TextField::Company => "company",
            TextField::Location => "location",
            TextField::Website => "website",
            TextField::Email => "email",
            TextField::Phone => "phone",
            TextField::Tagline => "tagline",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// The nine visibility flags, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Name,
    Headline,
    Company,
    Location,
    Website,
    Email,
    Phone,
    Tagline,
    Footer,
}

impl Toggle {
    pub const ALL: [Toggle; 9] = [
        Toggle::Name,
        Toggle::Headline,
        Toggle::Company,
        Toggle::Location,
        Toggle::Website,
        Toggle::Email,
        Toggle::Phone,
        Toggle::Tagline,
        Toggle::Footer,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Toggle::Name => "name",
            Toggle::Headline => "headline",
            Toggle::Company => "company",
            Toggle::Location => "location",
            Toggle::Website => "website",
            Toggle::Email => "email",
            Toggle::Phone => "phone",
            Toggle::Tagline => "tagline",
            Toggle::Footer => "footer",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_documented_values() {
        let fields = FieldSet::default();
        assert_eq!(fields.name, "Jordan Kim");
        assert_eq!(fields.headline, "Product Strategist");
        assert_eq!(fields.company, "Northwind Labs");
        assert_eq!(fields.location, "Seattle, WA");
        assert_eq!(fields.website, "jordankim.com");
        assert_eq!(fields.email, "hello@jordankim.com");
        assert_eq!(fields.phone, "+1 (415) 555-0132");
        assert!(fields.show_name);
        assert!(fields.show_footer);
        assert!(!fields.show_phone, "phone is hidden by default");
    }

    #[test]
    fn reset_restores_every_field_and_flag() {
        let mut fields = FieldSet::default();
        fields.name = "Someone Else".into();
        fields.tagline.clear();
        fields.toggle(Toggle::Footer);
        fields.toggle(Toggle::Phone);
        fields.reset();
        assert_eq!(fields, FieldSet::default());
    }

    #[test]
    fn toggle_flips_and_reports_new_value() {
        let mut fields = FieldSet::default();
        assert!(!fields.toggle(Toggle::Name));
        assert!(!fields.show_name);
        assert!(fields.toggle(Toggle::Name));
        assert!(fields.show_name);
    }

    #[test]
    fn toggle_touches_only_its_own_flag() {
        let mut fields = FieldSet::default();
        let before = fields.clone();
        fields.toggle(Toggle::Email);
        assert_ne!(fields.show_email, before.show_email);
        assert_eq!(fields.show_name, before.show_name);
        assert_eq!(fields.show_headline, before.show_headline);
        assert_eq!(fields.show_company, before.show_company);
        assert_eq!(fields.show_location, before.show_location);
        assert_eq!(fields.show_website, before.show_website);
        assert_eq!(fields.show_tagline, before.show_tagline);
        assert_eq!(fields.show_phone, before.show_phone);
        assert_eq!(fields.show_footer, before.show_footer);
    }

    #[test]
    fn text_field_keys_round_trip() {
        for field in TextField::ALL {
            assert_eq!(TextField::from_key(field.key()), Some(field));
        }
        assert_eq!(TextField::from_key("footer"), None);
    }

    #[test]
    fn toggle_keys_round_trip() {
        for flag in Toggle::ALL {
            assert_eq!(Toggle::from_key(flag.key()), Some(flag));
        }
        assert_eq!(Toggle::from_key("nope"), None);
    }

    #[test]
    fn text_mut_patches_single_field() {
        let mut fields = FieldSet::default();
        *fields.text_mut(TextField::Company) = "Acme".into();
        assert_eq!(fields.text(TextField::Company), "Acme");
        assert_eq!(fields.text(TextField::Name), "Jordan Kim");
    }
}
