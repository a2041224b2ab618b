//! Data sources the network widgets fetch from.
//!
//! The HTTP implementations live in [`crate::http`]; [`offline`] provides
//! deterministic in-memory sources for demos and tests.

use crate::carousel::Image;
use crate::error::FetchError;

/// Source of one page of `T` addressed by offset and length.
pub trait PageSource<T> {
    /// Fetch up to `limit` items starting at `offset`.
    fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<T>, FetchError>;
}

/// Source of image listings addressed by page number.
pub trait ImageSource {
    /// Fetch `limit` images from page `page` of the listing at `url`.
    fn fetch_images(&self, url: &str, page: u32, limit: u32) -> Result<Vec<Image>, FetchError>;
}

impl<T, S: PageSource<T> + ?Sized> PageSource<T> for Box<S> {
    fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<T>, FetchError> {
        (**self).fetch_page(offset, limit)
    }
}

impl<S: ImageSource + ?Sized> ImageSource for Box<S> {
    fn fetch_images(&self, url: &str, page: u32, limit: u32) -> Result<Vec<Image>, FetchError> {
        (**self).fetch_images(url, page, limit)
    }
}

pub mod offline {
    use super::{FetchError, Image, ImageSource, PageSource};
    use crate::pagination::Product;

    /// Fixed catalogue of `total` generated products.
    #[derive(Debug, Clone, Copy)]
    pub struct StaticProducts {
        pub total: usize,
    }

    impl Default for StaticProducts {
        fn default() -> Self {
            Self { total: 194 }
        }
    }

    impl PageSource<Product> for StaticProducts {
        fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Product>, FetchError> {
            let end = offset.saturating_add(limit).min(self.total);
            Ok((offset..end)
                .map(|index| {
                    let id = index as u64 + 1;
                    Product {
                        id,
                        title: format!("Sample product {id}"),
                        thumbnail: format!("offline://products/{id}/thumbnail.png"),
                    }
                })
                .collect())
        }
    }

    /// Generated image listing; ignores the URL.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct StaticImages;

    impl ImageSource for StaticImages {
        fn fetch_images(
            &self,
            _url: &str,
            page: u32,
            limit: u32,
        ) -> Result<Vec<Image>, FetchError> {
            let start = page.saturating_sub(1).saturating_mul(limit);
            Ok((start..start.saturating_add(limit))
                .map(|index| Image {
                    id: index.to_string(),
                    downloads: format!("offline://images/{index}.jpg"),
                    author: Some(format!("Photographer {}", index + 1)),
                })
                .collect())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn static_products_stop_at_total() {
            let source = StaticProducts { total: 25 };
            assert_eq!(source.fetch_page(0, 20).unwrap().len(), 20);
            assert_eq!(source.fetch_page(20, 20).unwrap().len(), 5);
            assert!(source.fetch_page(40, 20).unwrap().is_empty());
        }

        #[test]
        fn static_images_follow_page_numbers() {
            let images = StaticImages.fetch_images("", 2, 5).unwrap();
            assert_eq!(images.len(), 5);
            assert_eq!(images[0].id, "5");
        }
    }
}
