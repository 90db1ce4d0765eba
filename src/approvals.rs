//! Product approval operations.

use crate::models::{ProductApprovalCollection, Resource};
use crate::operation::require;
use crate::{Client, Operation, Response, Result};
use http::Method;

impl Client {
    /// Requests approval to publish a product.
    pub async fn request_product_approval(&self, product_id: &str) -> Result<Response<Resource>> {
        require("product_id", product_id)?;
        let op = Operation::new(
            "request_product_approval",
            Method::POST,
            "/products/{product_id}/approvals",
        )
        .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }

    /// Lists the approval workflows recorded on a product.
    pub async fn list_product_approvals(
        &self,
        product_id: &str,
    ) -> Result<Response<ProductApprovalCollection>> {
        require("product_id", product_id)?;
        let op = Operation::new(
            "list_product_approvals",
            Method::GET,
            "/products/{product_id}/approvals",
        )
        .path_param("product_id", product_id);
        self.call::<(), _>(op, None).await
    }
}
