//! Product lifecycle operations.

use crate::models::{ListProductsResponse, ProductDetails};
use crate::operation::require;
use crate::{Client, Operation, Response, Result};
use http::Method;
use serde::Serialize;

/// Options for [`Client::create_product`].
#[derive(Debug, Clone)]
pub struct CreateProductOptions {
    /// Display name of the product.
    pub product_name: String,
    /// Tax assessment category, e.g. `SOFTWARE`.
    pub tax_assessment: String,
    /// Product type, e.g. `SOFTWARE`.
    pub product_type: String,
    /// Whether the seller accepted the material agreement.
    pub material_agreement: Option<bool>,
}

impl CreateProductOptions {
    /// Creates options with the required fields.
    pub fn new(
        product_name: impl Into<String>,
        tax_assessment: impl Into<String>,
        product_type: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            tax_assessment: tax_assessment.into(),
            product_type: product_type.into(),
            material_agreement: None,
        }
    }

    /// Records acceptance of the material agreement.
    pub fn material_agreement(mut self, accepted: bool) -> Self {
        self.material_agreement = Some(accepted);
        self
    }
}

/// Options for [`Client::update_product`]. Unset fields are left unchanged
/// on the server.
#[derive(Debug, Clone)]
pub struct UpdateProductOptions {
    /// Id of the product to update.
    pub product_id: String,
    pub product_name: Option<String>,
    pub tax_assessment: Option<String>,
    pub product_type: Option<String>,
    pub material_agreement: Option<bool>,
}

impl UpdateProductOptions {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: None,
            tax_assessment: None,
            product_type: None,
            material_agreement: None,
        }
    }

    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    pub fn tax_assessment(mut self, tax_assessment: impl Into<String>) -> Self {
        self.tax_assessment = Some(tax_assessment.into());
        self
    }

    pub fn product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    pub fn material_agreement(mut self, accepted: bool) -> Self {
        self.material_agreement = Some(accepted);
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    material_agreement: Option<bool>,
}

#[derive(Serialize)]
struct ReasonBody {
    reason: String,
}

impl Client {
    /// Lists the account's products.
    pub async fn list_products(&self) -> Result<Response<ListProductsResponse>> {
        let op = Operation::new("list_products", Method::GET, "/products");
        self.call::<(), _>(op, None).await
    }

    /// Creates a new draft product.
    pub async fn create_product(
        &self,
        options: &CreateProductOptions,
    ) -> Result<Response<ProductDetails>> {
        require("product_name", &options.product_name)?;
        require("tax_assessment", &options.tax_assessment)?;
        require("product_type", &options.product_type)?;
        let op = Operation::new("create_product", Method::POST, "/products");
        let body = ProductBody {
            product_name: Some(options.product_name.clone()),
            tax_assessment: Some(options.tax_assessment.clone()),
            product_type: Some(options.product_type.clone()),
            material_agreement: options.material_agreement,
        };
        self.call(op, Some(&body)).await
    }

    /// Fetches one product by id.
    pub async fn get_product(&self, product_id: &str) -> Result<Response<ProductDetails>> {
        require("product_id", product_id)?;
        let op = Operation::new("get_product", Method::GET, "/products/{product_id}")
            .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }

    /// Updates a product's details.
    pub async fn update_product(
        &self,
        options: &UpdateProductOptions,
    ) -> Result<Response<ProductDetails>> {
        require("product_id", &options.product_id)?;
        let op = Operation::new("update_product", Method::PATCH, "/products/{product_id}")
            .path_param("product_id", &options.product_id);
        let body = ProductBody {
            product_name: options.product_name.clone(),
            tax_assessment: options.tax_assessment.clone(),
            product_type: options.product_type.clone(),
            material_agreement: options.material_agreement,
        };
        self.call(op, Some(&body)).await
    }

    /// Deletes a draft product. The server may reply with an empty body,
    /// in which case the response's `result` is `None`.
    pub async fn delete_product(&self, product_id: &str) -> Result<Response<serde_json::Value>> {
        require("product_id", product_id)?;
        let op = Operation::new("delete_product", Method::DELETE, "/products/{product_id}")
            .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }

    /// Publishes an approved product.
    pub async fn publish_product(&self, product_id: &str) -> Result<Response<ProductDetails>> {
        require("product_id", product_id)?;
        let op = Operation::new(
            "publish_product",
            Method::POST,
            "/products/{product_id}/publish",
        )
        .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }

    /// Suspends a published product.
    pub async fn suspend_product(
        &self,
        product_id: &str,
        reason: &str,
    ) -> Result<Response<ProductDetails>> {
        self.lifecycle_event("suspend_product", "/products/{product_id}/suspend", product_id, reason)
            .await
    }

    /// Deprecates a published product.
    pub async fn deprecate_product(
        &self,
        product_id: &str,
        reason: &str,
    ) -> Result<Response<ProductDetails>> {
        self.lifecycle_event(
            "deprecate_product",
            "/products/{product_id}/deprecate",
            product_id,
            reason,
        )
        .await
    }

    /// Restores a deprecated product.
    pub async fn restore_product(
        &self,
        product_id: &str,
        reason: &str,
    ) -> Result<Response<ProductDetails>> {
        self.lifecycle_event("restore_product", "/products/{product_id}/restore", product_id, reason)
            .await
    }

    async fn lifecycle_event(
        &self,
        name: &'static str,
        template: &'static str,
        product_id: &str,
        reason: &str,
    ) -> Result<Response<ProductDetails>> {
        require("product_id", product_id)?;
        require("reason", reason)?;
        let op = Operation::new(name, Method::POST, template).path_param("product_id", product_id);
        let body = ReasonBody {
            reason: reason.to_string(),
        };
        self.call(op, Some(&body)).await
    }
}
