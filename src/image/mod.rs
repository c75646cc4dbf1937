//! Representative image handling.
//!
//! Images are host objects ([`ImageLike`]); the host owns decoding and
//! variation files. This module decides *which* resize to ask for.

/// An image as seen by the resolver.
pub trait ImageLike: Clone {
    /// Absolute URL, used in `og:image` and `twitter:image`.
    fn http_url(&self) -> String;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Custom image field, such as alternative text. `None` when absent.
    fn field(&self, name: &str) -> Option<String>;

    /// Variation cropped/fitted to exactly `width` x `height`.
    fn size(&self, width: u32, height: u32) -> Self;

    /// Variation scaled to `width`, keeping aspect ratio.
    fn scale_width(&self, width: u32) -> Self;

    /// Variation scaled to `height`, keeping aspect ratio.
    fn scale_height(&self, height: u32) -> Self;
}

/// Resize request derived from the configured target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    Exact(u32, u32),
    Width(u32),
    Height(u32),
    Original,
}

impl Resize {
    /// Pick the resize for a target box; `None` means unset.
    pub fn for_box(width: Option<u32>, height: Option<u32>) -> Self {
        match (width, height) {
            (Some(w), Some(h)) => Self::Exact(w, h),
            (Some(w), None) => Self::Width(w),
            (None, Some(h)) => Self::Height(h),
            (None, None) => Self::Original,
        }
    }

    pub fn apply<I: ImageLike>(self, image: I) -> I {
        match self {
            Self::Exact(w, h) => image.size(w, h),
            Self::Width(w) => image.scale_width(w),
            Self::Height(h) => image.scale_height(h),
            Self::Original => image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockImage;

    #[test]
    fn test_for_box() {
        assert_eq!(Resize::for_box(Some(1200), Some(630)), Resize::Exact(1200, 630));
        assert_eq!(Resize::for_box(Some(100), None), Resize::Width(100));
        assert_eq!(Resize::for_box(None, Some(80)), Resize::Height(80));
        assert_eq!(Resize::for_box(None, None), Resize::Original);
    }

    #[test]
    fn test_apply_keeps_aspect_ratio() {
        let img = MockImage::new("photo.jpg", 2000, 1000);

        let scaled = Resize::Width(100).apply(img.clone());
        assert_eq!((scaled.width, scaled.height), (100, 50));
        assert_eq!(scaled.resized.as_deref(), Some("width"));

        let scaled = Resize::Height(100).apply(img.clone());
        assert_eq!((scaled.width, scaled.height), (200, 100));

        let exact = Resize::Exact(1200, 630).apply(img.clone());
        assert_eq!((exact.width, exact.height), (1200, 630));
        assert_eq!(exact.resized.as_deref(), Some("size"));

        let original = Resize::Original.apply(img);
        assert_eq!((original.width, original.height), (2000, 1000));
        assert!(original.resized.is_none());
    }
}
