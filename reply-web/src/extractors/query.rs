use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
};
use serde::{Deserialize, Serialize};

use crate::errors::WebResult;
use crate::pagination::{paginate, paginate_owned, Page};
use crate::response::Reply;

/// Default page size when `limit` is absent
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest accepted page size
pub const MAX_LIMIT: u32 = 100;

/// Pagination query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Items per page (max 100)
    pub limit: Option<u32>,
}

impl PaginationQuery {
    /// Effective page, defaulting to 1
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1) as usize
    }

    /// Effective limit, defaulting to 25
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT) as usize
    }

    /// Validate pagination parameters
    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err("Invalid pagination: limit must be greater than 0".into());
            }
            if limit > MAX_LIMIT {
                return Err(format!("Invalid pagination: maximum limit is {}", MAX_LIMIT));
            }
        }

        if self.page == Some(0) {
            return Err("Invalid pagination: page must be greater than 0".into());
        }

        Ok(())
    }

    /// Borrow the requested page of `items`
    pub fn apply<'a, T>(&self, items: &'a [T]) -> WebResult<&'a [T]> {
        paginate(items, self.page(), self.limit())
    }

    /// Copy the requested page of `items` with metadata
    pub fn apply_owned<T: Clone>(&self, items: &[T]) -> WebResult<Page<T>> {
        paginate_owned(items, self.page(), self.limit())
    }
}

/// Extract and validate `?page=&limit=`
///
/// Rejects with a `400 Bad Request` envelope.
#[derive(Debug, Clone)]
pub struct PaginationParams(pub PaginationQuery);

impl<S> FromRequestParts<S> for PaginationParams
where
    S: Send + Sync,
{
    type Rejection = Reply;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pagination) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                Reply::rejection(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid pagination parameters: {}", err.body_text()),
                )
            })?;

        pagination
            .validate()
            .map_err(|message| Reply::rejection(StatusCode::BAD_REQUEST, message))?;

        Ok(PaginationParams(pagination))
    }
}
