//! Configuration management utilities

use serde::{Deserialize, Serialize};

/// Common pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: Some(1),
            page_size: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self.page_size.unwrap_or(20).clamp(1, 100);
        (page, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_defaults() {
        let (page, page_size) = PaginationParams::default().normalize();
        assert_eq!(page, 1);
        assert_eq!(page_size, 20);
    }

    #[test]
    fn normalize_clamps_bounds() {
        let params = PaginationParams {
            page: Some(0),
            page_size: Some(5000),
        };
        let (page, page_size) = params.normalize();
        assert_eq!(page, 1);
        assert_eq!(page_size, 100);
    }
}
