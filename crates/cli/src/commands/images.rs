//! `upload-image` and `reorder-images` subcommands.

use std::path::Path;
use std::sync::Arc;

use catalog_console_admin::dashboard::{DashboardClient, ImageFile};
use catalog_console_admin::products::{
    ImageReorderHandler, ImageUploadHandler, ProductDetails, wait_for,
};
use catalog_console_core::{ProductId, ReorderEvent};

use super::{CliError, ensure_clean, read_file, read_json};

/// Upload `file` to a product.
pub async fn upload(
    client: DashboardClient,
    product_id: String,
    file: &Path,
) -> Result<(), CliError> {
    let bytes = read_file(file)?;
    let file_name = file
        .file_name()
        .map_or_else(|| "image".to_string(), |name| name.to_string_lossy().into_owned());

    let mut image = ImageFile::new(file_name, bytes);
    if let Some(content_type) = content_type(file) {
        image = image.with_content_type(content_type);
    }

    let handler = ImageUploadHandler::new(ProductId::new(product_id), Arc::new(client));
    ensure_clean("productImageCreate", &wait_for(handler.upload(image)).await?)?;

    tracing::info!(file = %file.display(), "Image uploaded");
    Ok(())
}

/// Move one image and save the new order.
pub async fn reorder(
    client: DashboardClient,
    product: &Path,
    from: usize,
    to: usize,
) -> Result<(), CliError> {
    let product: ProductDetails = read_json(product)?;

    let handler = ImageReorderHandler::new(&product, Arc::new(client));
    let task = handler.reorder(ReorderEvent::new(from, to))?;
    ensure_clean("productImageReorder", &wait_for(task).await?)?;

    tracing::info!(product_id = %product.id, from, to, "Images reordered");
    Ok(())
}

/// Guess an image MIME type from the file extension.
fn content_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "avif" => Some("image/avif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(content_type(Path::new("front.PNG")), Some("image/png"));
        assert_eq!(content_type(Path::new("a/b/c.jpeg")), Some("image/jpeg"));
        assert_eq!(content_type(Path::new("notes.txt")), None);
        assert_eq!(content_type(Path::new("no_extension")), None);
    }
}
