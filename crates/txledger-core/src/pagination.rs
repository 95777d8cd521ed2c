use crate::error::TransactionError;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: i64 = 50;

/// A bounds-checked page window. Only obtainable through [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, TransactionError> {
        if page < 0 || size <= 0 || size > MAX_PAGE_SIZE {
            return Err(TransactionError::InvalidPagination { page, size });
        }
        let page = usize::try_from(page)
            .map_err(|_| TransactionError::InvalidPagination { page, size })?;

        Ok(Self {
            page,
            size: size as usize,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of entries preceding this page. Saturates for absurd page numbers.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        let first = PageRequest::new(0, 1).unwrap();
        assert_eq!(first.offset(), 0);

        let last = PageRequest::new(3, MAX_PAGE_SIZE).unwrap();
        assert_eq!(last.size(), 50);
        assert_eq!(last.offset(), 150);
    }

    #[test]
    fn test_rejects_out_of_range() {
        for (page, size) in [(-1, 10), (0, 0), (0, -5), (0, 51), (-3, 0)] {
            assert_eq!(
                PageRequest::new(page, size),
                Err(TransactionError::InvalidPagination { page, size }),
                "page={} size={} should be rejected",
                page,
                size
            );
        }
    }

    #[test]
    fn test_offset_saturates() {
        let req = PageRequest::new(i64::MAX, MAX_PAGE_SIZE).unwrap();
        assert_eq!(req.offset(), usize::MAX);
    }
}
