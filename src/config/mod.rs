//! Metadata configuration, usually loaded from a `metadata.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # MetadataConfig (this file)
//! ```
//!
//! # Options
//!
//! | Group          | Options                                                    |
//! |----------------|------------------------------------------------------------|
//! | Site           | `base_url`, `charset`, `viewport`, `keywords_selector`     |
//! | Document title | `page_title_selector`, `document_title_separator`, `site_name` |
//! | Description    | `description_selector`, `description_max_length`, `description_truncate_mode` |
//! | Image          | `image_selector`, `image_width`, `image_height`, `image_alt_field`, `image_inherit`, `image_fallback_page` |
//! | Hreflang       | `render_hreflang`, `hreflang_code_field`                   |
//! | Open Graph     | `render_og`, `og_type`                                     |
//! | Twitter        | `render_twitter`, `twitter_card`, `twitter_site`, `twitter_creator` |
//! | Facebook       | `render_facebook`, `facebook_app_id`                       |
//!
//! # Example
//!
//! ```toml
//! base_url = "https://example.com"
//! site_name = "Example"
//! description_truncate_mode = "sentence"
//! image_inherit = true
//! twitter_site = "@example"
//! ```

pub mod types;

pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use crate::utils::text::TruncateMode;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Option names used in validation diagnostics.
pub mod fields {
    use super::FieldPath;

    pub const BASE_URL: FieldPath = FieldPath::new("base_url");
    pub const CHARSET: FieldPath = FieldPath::new("charset");
    pub const VIEWPORT: FieldPath = FieldPath::new("viewport");
    pub const PAGE_TITLE_SELECTOR: FieldPath = FieldPath::new("page_title_selector");
    pub const DOCUMENT_TITLE_SEPARATOR: FieldPath = FieldPath::new("document_title_separator");
    pub const SITE_NAME: FieldPath = FieldPath::new("site_name");
    pub const DESCRIPTION_MAX_LENGTH: FieldPath = FieldPath::new("description_max_length");
    pub const HREFLANG_CODE_FIELD: FieldPath = FieldPath::new("hreflang_code_field");
    pub const OG_TYPE: FieldPath = FieldPath::new("og_type");
    pub const TWITTER_CARD: FieldPath = FieldPath::new("twitter_card");
}

// ============================================================================
// root configuration
// ============================================================================

/// Immutable, fully defaulted configuration for one render session.
///
/// Selector and field names are opaque to this crate; the host's
/// [`PageLike::lookup`](crate::PageLike::lookup) interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Base for every generated URL. Empty disables canonical and hreflang URLs.
    pub base_url: String,
    pub charset: String,
    pub viewport: String,
    pub keywords_selector: String,

    pub page_title_selector: String,
    pub document_title_separator: String,
    /// Appended to the document title, also used in `og:site_name`.
    pub site_name: String,

    pub description_selector: String,
    /// Maximum description length in characters (0 disables truncation).
    pub description_max_length: usize,
    pub description_truncate_mode: TruncateMode,

    pub image_selector: String,
    /// Target width in pixels (0 = unset).
    pub image_width: u32,
    /// Target height in pixels (0 = unset).
    pub image_height: u32,
    /// Image field holding the alternative text.
    pub image_alt_field: String,
    /// Walk ancestors (closest first) when the page has no image.
    pub image_inherit: bool,
    /// Page id searched last for an image.
    pub image_fallback_page: Option<u64>,

    pub render_hreflang: bool,
    /// Language field holding the hreflang code (e.g. `en-GB`).
    pub hreflang_code_field: String,

    pub render_og: bool,
    pub og_type: String,

    pub render_twitter: bool,
    pub twitter_card: String,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,

    pub render_facebook: bool,
    pub facebook_app_id: Option<String>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            base_url: "https://domain.com".into(),
            charset: "utf-8".into(),
            viewport: "width=device-width, initial-scale=1.0".into(),
            keywords_selector: "keywords".into(),
            page_title_selector: "title".into(),
            document_title_separator: "-".into(),
            site_name: "Site name".into(),
            description_selector: "summary".into(),
            description_max_length: 160,
            description_truncate_mode: TruncateMode::Word,
            image_selector: "image".into(),
            image_width: 1200,
            image_height: 630,
            image_alt_field: "alt".into(),
            image_inherit: false,
            image_fallback_page: None,
            render_hreflang: false,
            hreflang_code_field: "languageCode".into(),
            render_og: true,
            og_type: "website".into(),
            render_twitter: true,
            twitter_card: "summary_large_image".into(),
            twitter_site: None,
            twitter_creator: None,
            render_facebook: false,
            facebook_app_id: None,
        }
    }
}

impl MetadataConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are reported as warnings and otherwise ignored.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, diag) = Self::parse_with_ignored(&content)?;
        if !diag.warnings().is_empty() {
            log!("warning"; "unknown fields in {}", path.display());
            diag.print_warnings();
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields as warnings.
    fn parse_with_ignored(content: &str) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            diag.warn(path.to_string(), "unknown field");
        })?;
        Ok((config, diag))
    }

    /// Target image box, `None` for unset dimensions.
    pub fn image_size(&self) -> (Option<u32>, Option<u32>) {
        let dim = |v: u32| (v > 0).then_some(v);
        (dim(self.image_width), dim(self.image_height))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate required options.
    ///
    /// Resolution never calls this; hosts run it when accepting new settings.
    ///
    /// # Checks
    /// - `base_url` must be a valid http(s) URL with a host
    /// - `charset`, `viewport`, `page_title_selector`,
    ///   `document_title_separator` and `site_name` must be set
    /// - `og_type`, `twitter_card` and `hreflang_code_field` must be set
    ///   when their tag family is enabled
    ///
    /// Warnings are dropped; use [`diagnose`](Self::diagnose) to see them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.diagnose().into_result()
    }

    /// Run every validation check and return errors and warnings together.
    ///
    /// Nothing is printed; the host decides how to surface warnings.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.validate_base_url(&mut diag);

        let required = [
            (fields::CHARSET, &self.charset, true),
            (fields::VIEWPORT, &self.viewport, true),
            (fields::PAGE_TITLE_SELECTOR, &self.page_title_selector, true),
            (
                fields::DOCUMENT_TITLE_SEPARATOR,
                &self.document_title_separator,
                true,
            ),
            (fields::SITE_NAME, &self.site_name, true),
            (fields::OG_TYPE, &self.og_type, self.render_og),
            (fields::TWITTER_CARD, &self.twitter_card, self.render_twitter),
            (
                fields::HREFLANG_CODE_FIELD,
                &self.hreflang_code_field,
                self.render_hreflang,
            ),
        ];
        for (field, value, enabled) in required {
            if enabled && value.trim().is_empty() {
                diag.error(field, format!("{field} is required"));
            }
        }

        if self.description_max_length == 0 {
            diag.warn(
                fields::DESCRIPTION_MAX_LENGTH.as_str(),
                "0 disables description truncation",
            );
        }

        diag
    }

    fn validate_base_url(&self, diag: &mut ConfigDiagnostics) {
        if self.base_url.trim().is_empty() {
            diag.error_with_hint(
                fields::BASE_URL,
                "base URL is required",
                "use format like https://example.com",
            );
            return;
        }

        match url::Url::parse(&self.base_url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        fields::BASE_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        fields::BASE_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    fields::BASE_URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
