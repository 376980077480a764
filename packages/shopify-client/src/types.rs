use serde::Deserialize;

/// A single product from the Admin API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: i64,
    /// URL slug. Shopify always sets it, but older exports have it null.
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// Product variant. Carried through for completeness, nothing downstream reads it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub sku: Option<String>,
}

/// Body of `GET /products.json`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// One page of products plus the cursor for the page after it.
#[derive(Debug, Clone, Default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Decoded `rel="next"` URL from the `Link` header, if any.
    pub next_page_url: Option<String>,
}

impl ProductPage {
    pub fn is_last(&self) -> bool {
        self.next_page_url
            .as_deref()
            .map_or(true, |url| url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_response_deserializes() {
        let body = r#"{
            "products": [
                {
                    "id": 632910392,
                    "handle": "ipod-nano",
                    "title": "IPod Nano - 8GB",
                    "variants": [
                        {"id": 808950810, "product_id": 632910392, "sku": "IPOD2008PINK"}
                    ]
                },
                {"id": 921728736, "handle": null}
            ]
        }"#;

        let parsed: ProductsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.products.len(), 2);
        assert_eq!(parsed.products[0].handle.as_deref(), Some("ipod-nano"));
        assert_eq!(parsed.products[0].variants[0].sku.as_deref(), Some("IPOD2008PINK"));
        assert_eq!(parsed.products[1].handle, None);
        assert!(parsed.products[1].variants.is_empty());
    }

    #[test]
    fn test_page_without_cursor_is_last() {
        let mut page = ProductPage::default();
        assert!(page.is_last());

        page.next_page_url = Some(String::new());
        assert!(page.is_last());

        page.next_page_url = Some("https://shop.example/next".into());
        assert!(!page.is_last());
    }
}
