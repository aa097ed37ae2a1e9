/// A catalog product. Immutable once constructed by the API boundary;
/// identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Absolute image URL (the boundary adapter has already prefixed the
    /// configured asset host).
    pub image: String,
    pub category: String,
    /// `None` means the product cannot be purchased.
    pub price: Option<u64>,
}

impl ProductItem {
    pub fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}
