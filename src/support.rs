//! Support data and support change request operations.
//!
//! Support changes to an already approved or published product go through
//! change requests: create a change, request a review, then merge the
//! approved changeset into the published product.

use crate::models::{
    ChangeRequest, ChangeRequestCollection, EscalationContact, ProductDetails, Resource, Support,
    SupportDetails, SupportEscalation,
};
use crate::operation::require;
use crate::{Client, Operation, Response, Result};
use http::Method;
use serde::Serialize;

/// Options for [`Client::update_support`]. Unset fields are left unchanged
/// on the server.
#[derive(Debug, Clone)]
pub struct UpdateSupportOptions {
    /// Id of the product whose support data is updated.
    pub product_id: String,
    pub escalation_contacts: Option<Vec<EscalationContact>>,
    pub locations: Option<Vec<String>>,
    pub support_details: Option<Vec<SupportDetails>>,
    pub support_escalation: Option<SupportEscalation>,
    pub support_type: Option<String>,
    pub url: Option<String>,
}

impl UpdateSupportOptions {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            escalation_contacts: None,
            locations: None,
            support_details: None,
            support_escalation: None,
            support_type: None,
            url: None,
        }
    }

    pub fn escalation_contacts(mut self, contacts: Vec<EscalationContact>) -> Self {
        self.escalation_contacts = Some(contacts);
        self
    }

    pub fn locations(mut self, locations: Vec<String>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn support_details(mut self, details: Vec<SupportDetails>) -> Self {
        self.support_details = Some(details);
        self
    }

    pub fn support_escalation(mut self, escalation: SupportEscalation) -> Self {
        self.support_escalation = Some(escalation);
        self
    }

    pub fn support_type(mut self, support_type: impl Into<String>) -> Self {
        self.support_type = Some(support_type.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SupportBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    escalation_contacts: Option<&'a Vec<EscalationContact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locations: Option<&'a Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    support_details: Option<&'a Vec<SupportDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    support_escalation: Option<&'a SupportEscalation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    support_type: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a String>,
}

#[derive(Serialize)]
struct ChangeBody<'a> {
    change: &'a Support,
}

impl Client {
    /// Fetches a product's support data.
    pub async fn get_support(&self, product_id: &str) -> Result<Response<Support>> {
        require("product_id", product_id)?;
        let op = Operation::new("get_support", Method::GET, "/products/{product_id}/support")
            .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }

    /// Updates a product's support data directly; only possible before
    /// first approval. Published products change via change requests.
    pub async fn update_support(
        &self,
        options: &UpdateSupportOptions,
    ) -> Result<Response<Support>> {
        require("product_id", &options.product_id)?;
        let op = Operation::new(
            "update_support",
            Method::PATCH,
            "/products/{product_id}/support",
        )
        .path_param("product_id", &options.product_id);
        let body = SupportBody {
            escalation_contacts: options.escalation_contacts.as_ref(),
            locations: options.locations.as_ref(),
            support_details: options.support_details.as_ref(),
            support_escalation: options.support_escalation.as_ref(),
            support_type: options.support_type.as_ref(),
            url: options.url.as_ref(),
        };
        self.call(op, Some(&body)).await
    }

    /// Lists all change requests on a product.
    pub async fn list_support_change_requests(
        &self,
        product_id: &str,
    ) -> Result<Response<ChangeRequestCollection>> {
        require("product_id", product_id)?;
        let op = Operation::new(
            "list_support_change_requests",
            Method::GET,
            "/products/{product_id}/support/changes",
        )
        .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }

    /// Opens a change request carrying new support data.
    pub async fn create_support_change_request(
        &self,
        product_id: &str,
        change: &Support,
    ) -> Result<Response<ProductDetails>> {
        require("product_id", product_id)?;
        let op = Operation::new(
            "create_support_change_request",
            Method::POST,
            "/products/{product_id}/support/changes",
        )
        .path_param("product_id", product_id);
        self.call(op, Some(&ChangeBody { change })).await
    }

    /// Fetches one change request by id.
    pub async fn get_support_change_request(
        &self,
        product_id: &str,
        change_request_id: &str,
    ) -> Result<Response<ChangeRequest>> {
        require("product_id", product_id)?;
        require("change_request_id", change_request_id)?;
        let op = Operation::new(
            "get_support_change_request",
            Method::GET,
            "/products/{product_id}/support/changes/{change_request_id}",
        )
        .path_param("product_id", product_id)
        .path_param("change_request_id", change_request_id);
        self.call::<(), _>(op, None).await
    }

    /// Replaces the changeset of an open change request.
    pub async fn update_support_change_request(
        &self,
        product_id: &str,
        change_request_id: &str,
        change: &Support,
    ) -> Result<Response<ProductDetails>> {
        require("product_id", product_id)?;
        require("change_request_id", change_request_id)?;
        let op = Operation::new(
            "update_support_change_request",
            Method::PATCH,
            "/products/{product_id}/support/changes/{change_request_id}",
        )
        .path_param("product_id", product_id)
        .path_param("change_request_id", change_request_id);
        self.call(op, Some(&ChangeBody { change })).await
    }

    /// Lists review events recorded on a change request.
    pub async fn list_support_change_request_reviews(
        &self,
        product_id: &str,
        change_request_id: &str,
    ) -> Result<Response<Resource>> {
        require("product_id", product_id)?;
        require("change_request_id", change_request_id)?;
        let op = Operation::new(
            "list_support_change_request_reviews",
            Method::GET,
            "/products/{product_id}/support/changes/{change_request_id}/reviews",
        )
        .path_param("product_id", product_id)
        .path_param("change_request_id", change_request_id);
        self.call::<(), _>(op, None).await
    }

    /// Asks for a review of a change request.
    pub async fn request_support_change_request_review(
        &self,
        product_id: &str,
        change_request_id: &str,
    ) -> Result<Response<Resource>> {
        require("product_id", product_id)?;
        require("change_request_id", change_request_id)?;
        let op = Operation::new(
            "request_support_change_request_review",
            Method::POST,
            "/products/{product_id}/support/changes/{change_request_id}/reviews",
        )
        .path_param("product_id", product_id)
        .path_param("change_request_id", change_request_id);
        self.call::<(), _>(op, None).await
    }

    /// Merges an approved changeset into the published product.
    pub async fn merge_support_change_request(
        &self,
        product_id: &str,
        change_request_id: &str,
    ) -> Result<Response<ProductDetails>> {
        require("product_id", product_id)?;
        require("change_request_id", change_request_id)?;
        let op = Operation::new(
            "merge_support_change_request",
            Method::POST,
            "/products/{product_id}/support/changes/{change_request_id}/merge",
        )
        .path_param("product_id", product_id)
        .path_param("change_request_id", change_request_id);
        self.call::<(), _>(op, None).await
    }

    /// Requests approval of a product's support information.
    pub async fn request_support_approval(&self, product_id: &str) -> Result<Response<Resource>> {
        require("product_id", product_id)?;
        let op = Operation::new(
            "request_support_approval",
            Method::POST,
            "/products/{product_id}/support/approvals",
        )
        .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }
}
