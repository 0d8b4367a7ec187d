pub type PhotoId = String;

/// Image size to pick when downloading a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadVariant {
    Small,
    #[default]
    Regular,
    Full,
    Raw,
}

impl DownloadVariant {
    pub const ALL: [DownloadVariant; 4] = [
        DownloadVariant::Small,
        DownloadVariant::Regular,
        DownloadVariant::Full,
        DownloadVariant::Raw,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DownloadVariant::Small => "small",
            DownloadVariant::Regular => "regular",
            DownloadVariant::Full => "full",
            DownloadVariant::Raw => "raw",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoUrls {
    /// Thumbnail, always present.
    pub small: String,
    pub regular: Option<String>,
    pub full: Option<String>,
    pub raw: Option<String>,
}

impl PhotoUrls {
    /// URL for `variant`, falling back to the next smaller size that exists.
    pub fn for_variant(&self, variant: DownloadVariant) -> &str {
        let candidates = [&self.raw, &self.full, &self.regular];
        let skip = match variant {
            DownloadVariant::Raw => 0,
            DownloadVariant::Full => 1,
            DownloadVariant::Regular => 2,
            DownloadVariant::Small => 3,
        };
        candidates
            .into_iter()
            .skip(skip)
            .find_map(|url| url.as_deref())
            .unwrap_or(&self.small)
    }
}

/// Read-only projection of one search result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Photo {
    pub id: PhotoId,
    pub urls: PhotoUrls,
    pub description: Option<String>,
    pub author_name: String,
    pub source_link: String,
    pub width: u32,
    pub height: u32,
    pub likes: u32,
}

impl Photo {
    pub fn thumbnail_url(&self) -> &str {
        &self.urls.small
    }
}

#[cfg(test)]
mod tests {
    use super::{DownloadVariant, PhotoUrls};

    fn urls(regular: bool, full: bool, raw: bool) -> PhotoUrls {
        PhotoUrls {
            small: "s".into(),
            regular: regular.then(|| "r".into()),
            full: full.then(|| "f".into()),
            raw: raw.then(|| "w".into()),
        }
    }

    #[test]
    fn picks_exact_variant_when_present() {
        let all = urls(true, true, true);
        assert_eq!(all.for_variant(DownloadVariant::Small), "s");
        assert_eq!(all.for_variant(DownloadVariant::Regular), "r");
        assert_eq!(all.for_variant(DownloadVariant::Full), "f");
        assert_eq!(all.for_variant(DownloadVariant::Raw), "w");
    }

    #[test]
    fn falls_back_to_smaller_variant() {
        assert_eq!(urls(true, false, false).for_variant(DownloadVariant::Raw), "r");
        assert_eq!(urls(false, false, false).for_variant(DownloadVariant::Full), "s");
        // Never falls back upwards.
        assert_eq!(urls(false, true, true).for_variant(DownloadVariant::Regular), "s");
    }

    #[test]
    fn variant_labels_parse_case_insensitively() {
        assert_eq!(DownloadVariant::from_label(" FULL "), Some(DownloadVariant::Full));
        assert_eq!(DownloadVariant::from_label("huge"), None);
    }
}
