//! Backend Endpoint Configuration

/// Base URL of the storefront REST API.
/// Overridable at build time via `STOREFRONT_API_BASE`.
pub fn api_base() -> &'static str {
    option_env!("STOREFRONT_API_BASE").unwrap_or("http://localhost:8000")
}

/// Absolute URL for an uploaded product image.
pub fn upload_url(image: &str) -> String {
    format!("{}/uploads/{}", api_base(), image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_joins_base_and_file_name() {
        assert_eq!(
            upload_url("tiramisu.jpg"),
            format!("{}/uploads/tiramisu.jpg", api_base())
        );
    }
}
