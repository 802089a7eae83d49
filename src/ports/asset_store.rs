use crate::domain::AppError;

/// Port over the numbered asset store and its published slot.
pub trait AssetStore {
    /// Whether asset `index` exists and can be published.
    fn exists(&self, index: u64) -> bool;

    /// Replace the published slot with a copy of asset `index`.
    ///
    /// Implementations must leave the previous slot contents in place if the
    /// copy fails.
    fn publish(&self, index: u64) -> Result<(), AppError>;

    /// Whether anything currently occupies the published slot.
    fn published_exists(&self) -> bool;
}

impl<T: AssetStore + ?Sized> AssetStore for Box<T> {
    fn exists(&self, index: u64) -> bool {
        (**self).exists(index)
    }

    fn publish(&self, index: u64) -> Result<(), AppError> {
        (**self).publish(index)
    }

    fn published_exists(&self) -> bool {
        (**self).published_exists()
    }
}
