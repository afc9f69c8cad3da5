use crate::dto::envelope::Pagination;
use crate::error::AppError;
use crate::store::PageWindow;

/// A validated `page`/`limit` pair. `page` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Absent values take defaults; non-positive values are rejected and an oversized
    /// `limit` is clamped to `max_limit`.
    pub fn from_query(
        page: Option<i64>,
        limit: Option<i64>,
        default_limit: i64,
        max_limit: i64,
    ) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        if page < 1 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }

        let limit = limit.unwrap_or(default_limit);
        if limit < 1 {
            return Err(AppError::Validation("limit must be at least 1".to_string()));
        }

        Ok(PageRequest {
            page,
            limit: limit.min(max_limit),
        })
    }

    /// `None` when neither value was given, meaning "no pagination".
    pub fn optional(
        page: Option<i64>,
        limit: Option<i64>,
        default_limit: i64,
        max_limit: i64,
    ) -> Result<Option<Self>, AppError> {
        if page.is_none() && limit.is_none() {
            return Ok(None);
        }
        Self::from_query(page, limit, default_limit, max_limit).map(Some)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            limit: self.limit,
            offset: (self.page - 1).saturating_mul(self.limit),
        }
    }

    pub fn pagination(&self, total: i64) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total,
            total_pages: total_pages(total, self.limit),
        }
    }
}

/// `ceil(total / limit)`, zero when there is nothing to page through.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
