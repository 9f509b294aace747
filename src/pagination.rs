//! Normalization of untyped `page`/`size` query values into a bounded
//! offset/limit pair, plus the page-count math used by list responses.

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_SIZE: i64 = 10;
pub const MAX_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub size: i64,
}

impl Pagination {
    /// Non-numeric or absent values fall back to the defaults; `page` has
    /// a floor of 1 and `size` is clamped to `[1, MAX_SIZE]`.
    pub fn normalize(page: Option<&str>, size: Option<&str>) -> Self {
        let page = page
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE)
            .max(1);
        let size = size
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_SIZE)
            .clamp(1, MAX_SIZE);
        Self { page, size }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Total page count for a filtered row count.
    pub fn pages(&self, total: i64) -> i64 {
        (total + self.size - 1) / self.size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}
