//! Hreflang alternates.
//!
//! Requirements, all checked before any language is enumerated:
//!
//! 1. `render_hreflang` is enabled
//! 2. the host has language-specific page names
//! 3. the current language template has `hreflang_code_field`
//!
//! Languages without a code are ignored. With fewer than two coded
//! languages nothing is emitted. Languages the page is not viewable in are
//! skipped.

use super::Resolver;
use crate::debug;
use crate::host::HostServices;
use crate::page::PageLike;

/// One `<link rel="alternate" hreflang="...">` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

pub(super) fn collect<H: HostServices>(resolver: &Resolver<'_, H>) -> Vec<Alternate> {
    let config = resolver.config();
    let host = resolver.host();
    let code_field = config.hreflang_code_field.as_str();

    if !config.render_hreflang
        || !host.language_page_names()
        || !host.language_template_has_field(code_field)
    {
        return Vec::new();
    }

    let coded: Vec<_> = host
        .languages()
        .into_iter()
        .filter_map(|language| {
            let code = language.field(code_field)?.to_string();
            Some((language, code))
        })
        .collect();

    if coded.len() < 2 {
        debug!("hreflang"; "{} coded language(s), need at least 2", coded.len());
        return Vec::new();
    }

    coded
        .into_iter()
        .filter_map(|(language, code)| {
            if !resolver.page().is_viewable_by(&language) {
                debug!("hreflang"; "skipping {}: page not viewable", language.name);
                return None;
            }
            let href = resolver.url_for(Some(&language))?;
            Some(Alternate {
                hreflang: code,
                href,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::config::MetadataConfig;
    use crate::page::Language;
    use crate::resolve::{Alternate, Resolver};
    use crate::testing::{MockHost, MockPage};

    fn config() -> MetadataConfig {
        MetadataConfig {
            base_url: "https://example.com".into(),
            render_hreflang: true,
            ..MetadataConfig::default()
        }
    }

    fn page() -> MockPage {
        MockPage::new("/about/")
            .localized("finnish", "/fi/tietoa/")
            .localized("swedish", "/sv/om/")
    }

    fn host() -> MockHost {
        MockHost::multilingual(&[("default", "en"), ("finnish", "fi"), ("swedish", "sv")])
    }

    #[test]
    fn test_alternates_in_language_order() {
        let config = config();
        let host = host();
        let page = page();
        let resolver = Resolver::new(&config, &host, &page);

        assert_eq!(
            resolver.alternates(),
            [
                Alternate {
                    hreflang: "en".into(),
                    href: "https://example.com/about/".into()
                },
                Alternate {
                    hreflang: "fi".into(),
                    href: "https://example.com/fi/tietoa/".into()
                },
                Alternate {
                    hreflang: "sv".into(),
                    href: "https://example.com/sv/om/".into()
                },
            ]
        );
    }

    #[test]
    fn test_skips_unviewable_language() {
        let config = config();
        let host = host();
        let page = page().hidden_in("swedish");
        let resolver = Resolver::new(&config, &host, &page);

        let codes: Vec<_> = resolver
            .alternates()
            .iter()
            .map(|a| a.hreflang.as_str())
            .collect();
        assert_eq!(codes, ["en", "fi"]);
    }

    #[test]
    fn test_needs_two_coded_languages() {
        let config = config();
        let mut host = host();
        host.languages = vec![
            Language::new("default").with_field("languageCode", "en"),
            Language::new("finnish").with_field("languageCode", ""),
            Language::new("swedish"),
        ];
        let page = page();
        let resolver = Resolver::new(&config, &host, &page);
        assert!(resolver.alternates().is_empty());
    }

    #[test]
    fn test_requirements() {
        let page = page();

        let disabled = MetadataConfig {
            render_hreflang: false,
            ..config()
        };
        let host = host();
        assert!(Resolver::new(&disabled, &host, &page).alternates().is_empty());

        let config = config();
        let mut no_page_names = host.clone();
        no_page_names.page_names = false;
        assert!(Resolver::new(&config, &no_page_names, &page).alternates().is_empty());

        let mut no_field = host.clone();
        no_field.template_fields.clear();
        assert!(Resolver::new(&config, &no_field, &page).alternates().is_empty());
    }

    #[test]
    fn test_no_base_url_no_alternates() {
        let config = MetadataConfig {
            base_url: String::new(),
            ..config()
        };
        let host = host();
        let page = page();
        assert!(Resolver::new(&config, &host, &page).alternates().is_empty());
    }
}
