//! In-memory host used by unit tests.

use std::cell::Cell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::host::HostServices;
use crate::image::ImageLike;
use crate::page::{FieldValue, Language, PageLike, UrlPolicy};

// =============================================================================
// MockImage
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MockImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub fields: FxHashMap<String, String>,
    /// Last resize operation applied (`size`, `width`, `height`).
    pub resized: Option<String>,
}

impl MockImage {
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            fields: FxHashMap::default(),
            resized: None,
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    fn resized(&self, op: &str, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            resized: Some(op.to_string()),
            ..self.clone()
        }
    }
}

impl ImageLike for MockImage {
    fn http_url(&self) -> String {
        format!("https://cdn.example.com/{}", self.name)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn size(&self, width: u32, height: u32) -> Self {
        self.resized("size", width, height)
    }

    fn scale_width(&self, width: u32) -> Self {
        let height = u64::from(self.height) * u64::from(width) / u64::from(self.width.max(1));
        self.resized("width", width, height as u32)
    }

    fn scale_height(&self, height: u32) -> Self {
        let width = u64::from(self.width) * u64::from(height) / u64::from(self.height.max(1));
        self.resized("height", width as u32, height)
    }
}

// =============================================================================
// MockPage
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct MockPage {
    pub path: String,
    pub localized: FxHashMap<String, String>,
    pub fields: FxHashMap<String, FieldValue<MockImage>>,
    /// Root first.
    pub parents: Vec<MockPage>,
    pub hidden_in: Vec<String>,
    pub policy: UrlPolicy,
    /// Number of `lookup` calls, shared between clones.
    pub lookups: Rc<Cell<usize>>,
}

impl MockPage {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            policy: UrlPolicy {
                slash_urls: true,
                ..UrlPolicy::default()
            },
            ..Self::default()
        }
    }

    pub fn field(mut self, selector: &str, value: impl Into<FieldValue<MockImage>>) -> Self {
        self.fields.insert(selector.to_string(), value.into());
        self
    }

    pub fn image(self, selector: &str, image: MockImage) -> Self {
        self.field(selector, FieldValue::Image(image))
    }

    pub fn localized(mut self, language: &str, path: &str) -> Self {
        self.localized
            .insert(language.to_string(), path.to_string());
        self
    }

    /// Add an ancestor; call root first.
    pub fn parent(mut self, page: MockPage) -> Self {
        self.parents.push(page);
        self
    }

    pub fn hidden_in(mut self, language: &str) -> Self {
        self.hidden_in.push(language.to_string());
        self
    }

    pub fn policy(mut self, policy: UrlPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl PageLike for MockPage {
    type Image = MockImage;

    fn lookup(&self, selector: &str) -> Option<FieldValue<MockImage>> {
        self.lookups.set(self.lookups.get() + 1);
        self.fields.get(selector).cloned()
    }

    fn url(&self) -> String {
        self.path.clone()
    }

    fn localized_url(&self, language: &Language) -> String {
        self.localized
            .get(&language.name)
            .cloned()
            .unwrap_or_else(|| self.path.clone())
    }

    fn parents(&self) -> Vec<Self> {
        self.parents.clone()
    }

    fn is_viewable_by(&self, language: &Language) -> bool {
        !self.hidden_in.contains(&language.name)
    }

    fn url_policy(&self) -> UrlPolicy {
        self.policy
    }
}

// =============================================================================
// MockHost
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct MockHost {
    pub languages: Vec<Language>,
    pub pages: FxHashMap<u64, MockPage>,
    pub segments: String,
    pub page_names: bool,
    pub template_fields: Vec<String>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi-language host with `languageCode` on the language template.
    pub fn multilingual(languages: &[(&str, &str)]) -> Self {
        Self {
            languages: languages
                .iter()
                .map(|(name, code)| Language::new(*name).with_field("languageCode", *code))
                .collect(),
            page_names: true,
            template_fields: vec!["languageCode".to_string()],
            ..Self::default()
        }
    }

    pub fn page(mut self, id: u64, page: MockPage) -> Self {
        self.pages.insert(id, page);
        self
    }

    pub fn segments(mut self, segments: &str) -> Self {
        self.segments = segments.to_string();
        self
    }
}

impl HostServices for MockHost {
    type Page = MockPage;

    fn languages(&self) -> Vec<Language> {
        self.languages.clone()
    }

    fn find_page(&self, id: u64) -> Option<MockPage> {
        self.pages.get(&id).cloned()
    }

    fn url_segment_str(&self) -> String {
        self.segments.clone()
    }

    fn language_page_names(&self) -> bool {
        self.page_names
    }

    fn language_template_has_field(&self, field: &str) -> bool {
        self.template_fields.iter().any(|f| f == field)
    }
}
