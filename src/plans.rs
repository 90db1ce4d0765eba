//! Pricing plan operations.

use crate::models::{PlanCollection, PricingPlan};
use crate::operation::require;
use crate::{Client, Operation, Response, Result};
use http::Method;
use serde::Serialize;

/// Options for [`Client::create_plan`].
#[derive(Debug, Clone)]
pub struct CreatePlanOptions {
    /// Id of the product the plan belongs to.
    pub product_id: String,
    /// Short description of the plan.
    pub description: String,
    /// Display label, e.g. `Free`.
    pub label: String,
    /// Plan type, e.g. `byol`.
    pub plan_type: String,
    /// URL with plan details.
    pub url: String,
}

impl CreatePlanOptions {
    pub fn new(
        product_id: impl Into<String>,
        description: impl Into<String>,
        label: impl Into<String>,
        plan_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            description: description.into(),
            label: label.into(),
            plan_type: plan_type.into(),
            url: url.into(),
        }
    }
}

/// Options for [`Client::update_plan`]. Unset fields are left unchanged on
/// the server.
#[derive(Debug, Clone)]
pub struct UpdatePlanOptions {
    pub product_id: String,
    pub pricing_plan_id: String,
    pub description: Option<String>,
    pub label: Option<String>,
    pub plan_type: Option<String>,
    pub url: Option<String>,
}

impl UpdatePlanOptions {
    pub fn new(product_id: impl Into<String>, pricing_plan_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            pricing_plan_id: pricing_plan_id.into(),
            description: None,
            label: None,
            plan_type: None,
            url: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn plan_type(mut self, plan_type: impl Into<String>) -> Self {
        self.plan_type = Some(plan_type.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    plan_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Client {
    /// Lists the pricing plans connected to a product.
    pub async fn list_plans(&self, product_id: &str) -> Result<Response<PlanCollection>> {
        require("product_id", product_id)?;
        let op = Operation::new("list_plans", Method::GET, "/products/{product_id}/plans")
            .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }

    /// Creates a pricing plan on a product.
    pub async fn create_plan(&self, options: &CreatePlanOptions) -> Result<Response<PricingPlan>> {
        require("product_id", &options.product_id)?;
        require("description", &options.description)?;
        require("label", &options.label)?;
        require("plan_type", &options.plan_type)?;
        require("url", &options.url)?;
        let op = Operation::new("create_plan", Method::POST, "/products/{product_id}/plans")
            .path_param("product_id", &options.product_id);
        let body = PlanBody {
            description: Some(options.description.clone()),
            label: Some(options.label.clone()),
            plan_type: Some(options.plan_type.clone()),
            url: Some(options.url.clone()),
        };
        self.call(op, Some(&body)).await
    }

    /// Fetches one pricing plan by id.
    pub async fn get_plan(
        &self,
        product_id: &str,
        pricing_plan_id: &str,
    ) -> Result<Response<PricingPlan>> {
        require("product_id", product_id)?;
        require("pricing_plan_id", pricing_plan_id)?;
        let op = Operation::new(
            "get_plan",
            Method::GET,
            "/products/{product_id}/plans/{pricing_plan_id}",
        )
        .path_param("product_id", product_id)
        .path_param("pricing_plan_id", pricing_plan_id);
        self.call::<(), _>(op, None).await
    }

    /// Updates a pricing plan.
    pub async fn update_plan(&self, options: &UpdatePlanOptions) -> Result<Response<PricingPlan>> {
        require("product_id", &options.product_id)?;
        require("pricing_plan_id", &options.pricing_plan_id)?;
        let op = Operation::new(
            "update_plan",
            Method::PATCH,
            "/products/{product_id}/plans/{pricing_plan_id}",
        )
        .path_param("product_id", &options.product_id)
        .path_param("pricing_plan_id", &options.pricing_plan_id);
        let body = PlanBody {
            description: options.description.clone(),
            label: options.label.clone(),
            plan_type: options.plan_type.clone(),
            url: options.url.clone(),
        };
        self.call(op, Some(&body)).await
    }

    /// Deletes a pricing plan.
    pub async fn delete_plan(
        &self,
        product_id: &str,
        pricing_plan_id: &str,
    ) -> Result<Response<PricingPlan>> {
        require("product_id", product_id)?;
        require("pricing_plan_id", pricing_plan_id)?;
        let op = Operation::new(
            "delete_plan",
            Method::DELETE,
            "/products/{product_id}/plans/{pricing_plan_id}",
        )
        .path_param("product_id", product_id)
        .path_param("pricing_plan_id", pricing_plan_id);
        self.call::<(), _>(op, None).await
    }
}
