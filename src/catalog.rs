//! Catalog listing operations.

use crate::models::{CatalogListingDetails, HighlightSection, MediaSection, Resource};
use crate::operation::require;
use crate::{Client, Operation, Response, Result};
use http::Method;
use serde::Serialize;

/// Options for [`Client::update_catalog`]. Unset fields are left unchanged
/// on the server.
#[derive(Debug, Clone)]
pub struct UpdateCatalogOptions {
    /// Id of the product whose catalog listing is updated.
    pub product_id: String,
    pub catalog_id: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub documentation_url: Option<String>,
    pub highlights: Option<Vec<HighlightSection>>,
    pub icon_url: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub label: Option<String>,
    pub long_description: Option<String>,
    pub media: Option<Vec<MediaSection>>,
    pub name: Option<String>,
    pub pricing_model: Option<String>,
    pub provider: Option<String>,
    pub provider_type: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl UpdateCatalogOptions {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            catalog_id: None,
            category: None,
            description: None,
            documentation_url: None,
            highlights: None,
            icon_url: None,
            keywords: None,
            label: None,
            long_description: None,
            media: None,
            name: None,
            pricing_model: None,
            provider: None,
            provider_type: None,
            tags: None,
        }
    }

    pub fn catalog_id(mut self, catalog_id: impl Into<String>) -> Self {
        self.catalog_id = Some(catalog_id.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    pub fn highlights(mut self, highlights: Vec<HighlightSection>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = Some(long_description.into());
        self
    }

    pub fn media(mut self, media: Vec<MediaSection>) -> Self {
        self.media = Some(media);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn pricing_model(mut self, pricing_model: impl Into<String>) -> Self {
        self.pricing_model = Some(pricing_model.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn provider_type(mut self, provider_type: Vec<String>) -> Self {
        self.provider_type = Some(provider_type);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog_id: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation_url: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlights: Option<&'a Vec<HighlightSection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<&'a Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    long_description: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<&'a Vec<MediaSection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pricing_model: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_type: Option<&'a Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a Vec<String>>,
}

impl Client {
    /// Fetches a product's catalog listing.
    pub async fn get_catalog(&self, product_id: &str) -> Result<Response<CatalogListingDetails>> {
        require("product_id", product_id)?;
        let op = Operation::new("get_catalog", Method::GET, "/products/{product_id}/catalog")
            .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }

    /// Updates a product's catalog listing.
    pub async fn update_catalog(
        &self,
        options: &UpdateCatalogOptions,
    ) -> Result<Response<CatalogListingDetails>> {
        require("product_id", &options.product_id)?;
        let op = Operation::new(
            "update_catalog",
            Method::PATCH,
            "/products/{product_id}/catalog",
        )
        .path_param("product_id", &options.product_id);
        let body = CatalogBody {
            catalog_id: options.catalog_id.as_ref(),
            category: options.category.as_ref(),
            description: options.description.as_ref(),
            documentation_url: options.documentation_url.as_ref(),
            highlights: options.highlights.as_ref(),
            icon_url: options.icon_url.as_ref(),
            keywords: options.keywords.as_ref(),
            label: options.label.as_ref(),
            long_description: options.long_description.as_ref(),
            media: options.media.as_ref(),
            name: options.name.as_ref(),
            pricing_model: options.pricing_model.as_ref(),
            provider: options.provider.as_ref(),
            provider_type: options.provider_type.as_ref(),
            tags: options.tags.as_ref(),
        };
        self.call(op, Some(&body)).await
    }

    /// Requests review and approval of a product's catalog listing.
    pub async fn request_catalog_approval(&self, product_id: &str) -> Result<Response<Resource>> {
        require("product_id", product_id)?;
        let op = Operation::new(
            "request_catalog_approval",
            Method::POST,
            "/products/{product_id}/catalog/approvals",
        )
        .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }
}
