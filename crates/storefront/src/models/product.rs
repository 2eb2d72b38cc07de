//! Catalog product records.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sonero_core::{PriceError, ProductId, parse_amount};

/// A watch in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Primary image URL or path.
    pub image: String,
    /// Alternate gallery, order-significant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl Product {
    /// Create a product with a freshly generated id.
    #[must_use]
    pub fn create(fields: NewProduct) -> Self {
        Self {
            id: ProductId::generate(),
            name: fields.name,
            price: fields.price,
            image: fields.image,
            images: fields.images,
            desc: fields.desc,
            tags: fields.tags,
        }
    }

    /// Image shown on the product card: first gallery image, else `image`.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images
            .as_deref()
            .and_then(<[String]>::first)
            .map_or(self.image.as_str(), String::as_str)
    }

    /// Gallery images, falling back to the primary image when none are set.
    #[must_use]
    pub fn gallery(&self) -> Vec<&str> {
        match self.images.as_deref() {
            Some(images) if !images.is_empty() => images.iter().map(String::as_str).collect(),
            _ => vec![self.image.as_str()],
        }
    }
}

/// Fields for a new catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// Raw product fields as typed into the admin form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = PriceError;

    /// Coerce the price; everything else is taken as entered.
    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        let price = parse_amount(&form.price)?;
        let images = (!form.images.is_empty()).then_some(form.images);
        Ok(Self {
            name: form.name,
            price,
            image: form.image,
            images,
            desc: form.desc.unwrap_or_default(),
            tags: form.tags.into_iter().collect(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(images: Option<Vec<&str>>) -> Product {
        Product::create(NewProduct {
            name: "Sonero Minimalist".to_string(),
            price: Decimal::from(1290),
            image: "main.jpg".to_string(),
            images: images.map(|v| v.into_iter().map(String::from).collect()),
            ..NewProduct::default()
        })
    }

    #[test]
    fn test_gallery_falls_back_to_image() {
        let p = product(None);
        assert_eq!(p.gallery(), vec!["main.jpg"]);
        assert_eq!(p.primary_image(), "main.jpg");

        let p = product(Some(vec![]));
        assert_eq!(p.gallery(), vec!["main.jpg"]);
        assert_eq!(p.primary_image(), "main.jpg");
    }

    #[test]
    fn test_gallery_prefers_images() {
        let p = product(Some(vec!["front.jpg", "back.jpg"]));
        assert_eq!(p.gallery(), vec!["front.jpg", "back.jpg"]);
        assert_eq!(p.primary_image(), "front.jpg");
    }

    #[test]
    fn test_json_layout_matches_browser_records() {
        let json = r#"{"id":"abc","name":"Sonero Sport Chrono","price":1890,"image":"x.jpg","desc":""}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.price, Decimal::from(1890));
        assert!(p.images.is_none());
        assert!(p.tags.is_empty());

        let back = serde_json::to_value(&p).unwrap();
        assert!(back.get("images").is_none());
        assert!(back.get("tags").is_none());
        assert!(back["price"].is_number());
    }

    #[test]
    fn test_form_coerces_price() {
        let form = ProductForm {
            name: "Sonero Diver".to_string(),
            price: " 3100 ".to_string(),
            image: "d.jpg".to_string(),
            tags: vec!["sport".to_string(), "sport".to_string()],
            ..ProductForm::default()
        };
        let new = NewProduct::try_from(form).unwrap();
        assert_eq!(new.price, Decimal::from(3100));
        assert!(new.images.is_none());
        assert_eq!(new.tags.len(), 1);
    }

    #[test]
    fn test_form_rejects_non_numeric_price() {
        let form = ProductForm {
            price: "scump".to_string(),
            ..ProductForm::default()
        };
        assert!(NewProduct::try_from(form).is_err());
    }
}
