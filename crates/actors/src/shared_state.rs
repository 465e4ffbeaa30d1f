use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct SharedState<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> SharedState<T> {
    pub fn new(data: T) -> SharedState<T> {
        SharedState { inner: Arc::new(RwLock::new(data)) }
    }

    pub async fn read(&self) -> RwLockReadGuard<T> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<T> {
        self.inner.write().await
    }

    pub async fn update(&self, data: T) {
        *self.inner.write().await = data;
    }

    pub fn inner(&self) -> Arc<RwLock<T>> {
        self.inner.clone()
    }
}

impl<T> Clone for SharedState<T> {
    fn clone(&self) -> Self {
        SharedState { inner: self.inner.clone() }
    }
}
