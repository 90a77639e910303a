use crate::config::AssetConfig;

/// Turns an image reference from a record into a displayable URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    pub fn new(config: &AssetConfig) -> Self {
        ImageResolver {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, reference: &str) -> String {
        if reference.starts_with("http://")
            || reference.starts_with("https://")
            || reference.starts_with("data:")
        {
            return reference.to_string();
        }
        format!("{}/{}", self.base_url, reference.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_references_become_site_paths() {
        let images = ImageResolver::default();
        assert_eq!(images.resolve("products/lamp.png"), "/products/lamp.png");
    }

    #[test]
    fn asset_base_is_prefixed_once() {
        let images = ImageResolver::new(&AssetConfig {
            base_url: "https://cdn.example.com/img/".to_string(),
        });

        assert_eq!(images.resolve("/lamp.png"), "https://cdn.example.com/img/lamp.png");
        assert_eq!(
            images.resolve("https://other.example.com/a.png"),
            "https://other.example.com/a.png"
        );
    }
}
