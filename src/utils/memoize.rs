use std::future::Future;
use std::sync::OnceLock;
use tokio::sync::OnceCell;

/// A value computed on first access and cached for every later access.
#[derive(Debug)]
pub struct Memoized<T> {
    cell: OnceLock<T>,
}

impl<T> Memoized<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_init<F: FnOnce() -> T>(&self, produce: F) -> &T {
        self.cell.get_or_init(produce)
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Async counterpart of [`Memoized`] for fallible producers.
///
/// A producer that fails leaves the cell empty, so the next access runs it again.
/// Concurrent first accesses run the producer once.
#[derive(Debug)]
pub struct AsyncMemoized<T> {
    cell: OnceCell<T>,
}

impl<T> AsyncMemoized<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    pub async fn get_or_try_init<E, F, Fut>(&self, produce: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(produce).await
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_cached(&self) -> bool {
        self.cell.initialized()
    }
}

impl<T> Default for AsyncMemoized<T> {
    fn default() -> Self {
        Self::new()
    }
}
