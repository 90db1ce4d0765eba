//! Badge operations.

use crate::models::CloudBadge;
use crate::operation::require;
use crate::{Client, Operation, Response, Result};
use http::Method;

impl Client {
    /// Lists the badges available to the account's products.
    pub async fn list_badges(&self) -> Result<Response<Vec<CloudBadge>>> {
        let op = Operation::new("list_badges", Method::GET, "/products/badges");
        self.call::<(), _>(op, None).await
    }

    /// Fetches one badge by id.
    pub async fn get_badge(&self, badge_id: &str) -> Result<Response<CloudBadge>> {
        require("badge_id", badge_id)?;
        let op = Operation::new("get_badge", Method::GET, "/products/badges/{badge_id}")
            .path_param("badge_id", badge_id);
        self.call::<(), _>(op, None).await
    }
}
