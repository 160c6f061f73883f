use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductSku(pub String);

/// Catalog entry as it appears in a bundle template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogProduct {
    pub name: &'static str,
    pub sku: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleProduct {
    pub name: String,
    pub sku: ProductSku,
}

impl From<&CatalogProduct> for BundleProduct {
    fn from(product: &CatalogProduct) -> Self {
        Self { name: product.name.to_owned(), sku: ProductSku(product.sku.to_owned()) }
    }
}
