use crate::model::api::PageDto;

/// One page of domain models plus paging metadata.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page > 0 {
            self.total.div_ceil(self.per_page)
        } else {
            0
        }
    }

    /// Converts every item with `f` and wraps the result in a `PageDto`.
    pub fn into_dto<D>(self, f: impl Fn(T) -> D) -> PageDto<D> {
        let total_pages = self.total_pages();
        PageDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}
