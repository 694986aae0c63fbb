//! Product media variables.

use std::fmt;

use catalog_console_core::{ImageId, ProductId};
use serde::Serialize;

/// A file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name.
    pub file_name: String,
    /// MIME type, when known.
    pub content_type: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Create an upload from a file name and its contents.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

// Contents are omitted so uploads don't flood the logs.
impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Variables of the `ProductImageCreate` mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImageCreateVariables {
    /// Alt text.
    pub alt: String,
    /// The image file.
    pub image: ImageFile,
    /// Product the image is attached to.
    pub product: ProductId,
}

/// Variables of the `ProductImageReorder` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageReorderVariables {
    /// Every image of the product, in the new order.
    pub images_ids: Vec<ImageId>,
    /// Product owning the images.
    pub product_id: ProductId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_debug_omits_contents() {
        let file = ImageFile::new("shirt.png", vec![0xde, 0xad, 0xbe, 0xef])
            .with_content_type("image/png");

        let debug_output = format!("{file:?}");
        assert!(debug_output.contains("shirt.png"));
        assert!(debug_output.contains("len: 4"));
        assert!(!debug_output.contains("222"));
    }
}
