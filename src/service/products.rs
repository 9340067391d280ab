//! Product Service
//!
//! Owns the product collection and routes every read and write through the
//! cache layer.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, trace};

use crate::cache::CacheManager;
use crate::domain::{Product, ProductSearchFilter};
use crate::error::{ProductError, Result};

/// Cache key under which the whole collection is stored.
const PRODUCTS_CACHE_KEY: &str = "products";

// == Product Service Trait ==
/// Operations exposed over the product collection.
pub trait ProductService: Send + Sync {
    /// Returns the whole collection in insertion order.
    fn list_all(&self) -> Result<Vec<Product>>;

    /// Returns the products matching every active constraint of `filter`.
    fn search(&self, filter: &ProductSearchFilter) -> Result<Vec<Product>>;

    /// Appends `products` and returns the updated collection.
    fn add_products(&self, products: Option<Vec<Product>>) -> Result<Vec<Product>>;

    /// Replaces the product identified by `id` and returns the stored record.
    fn update_product(&self, id: &str, product: Option<Product>) -> Result<Product>;

    /// Appends one feedback entry to the product identified by `id`.
    fn add_feedback(&self, id: &str, tag: &str, score: i32) -> Result<Product>;

    /// Removes the product identified by `id` and echoes the id back.
    fn delete_product(&self, id: &str) -> Result<String>;
}

// == Product Services ==
/// Cache-fronted [`ProductService`].
///
/// The in-memory copy is rewritten together with the cache on every write,
/// under the same guard, so a cache expiry falls back to the last write.
pub struct ProductServices {
    cache: Arc<dyn CacheManager<Vec<Product>>>,
    products: Mutex<Vec<Product>>,
}

impl ProductServices {
    /// Creates a service with an empty collection.
    pub fn new(cache: Arc<dyn CacheManager<Vec<Product>>>) -> Self {
        Self {
            cache,
            products: Mutex::new(Vec::new()),
        }
    }

    // Current collection: cached copy if live, otherwise the in-memory one.
    fn load(&self, fallback: &[Product]) -> Vec<Product> {
        self.cache.get(PRODUCTS_CACHE_KEY).unwrap_or_else(|| {
            debug!("products cache entry absent, using in-memory collection");
            fallback.to_vec()
        })
    }

    fn read(&self) -> Vec<Product> {
        let guard = self.products.lock();
        self.load(&guard)
    }

    /// Runs one read-modify-write cycle under the collection guard.
    ///
    /// Nothing is written back when `op` fails.
    fn mutate<T>(&self, op: impl FnOnce(&mut Vec<Product>) -> Result<T>) -> Result<T> {
        let mut guard = self.products.lock();
        let mut working = self.load(&guard);

        let out = op(&mut working)?;

        self.cache.set(PRODUCTS_CACHE_KEY, working.clone())?;
        *guard = working;
        Ok(out)
    }
}

// == Unique Lookup ==
/// Index of the only product carrying `id`.
fn find_index(products: &[Product], id: &str) -> Result<usize> {
    trace!(id, "searching product by id");
    let mut matches = products
        .iter()
        .enumerate()
        .filter(|(_, p)| p.id == id)
        .map(|(i, _)| i);

    match (matches.next(), matches.count()) {
        (None, _) => Err(ProductError::NotFound(id.to_string())),
        (Some(index), 0) => Ok(index),
        (Some(_), rest) => Err(ProductError::Ambiguous {
            id: id.to_string(),
            count: rest + 1,
        }),
    }
}

fn require(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ProductError::InvalidInput(name.to_string()))
    } else {
        Ok(())
    }
}

fn logged<T>(op: &str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        error!(op, %err, "product operation failed");
    }
    result
}

impl ProductService for ProductServices {
    fn list_all(&self) -> Result<Vec<Product>> {
        let products = self.read();
        trace!(count = products.len(), "listing products");
        Ok(products)
    }

    fn search(&self, filter: &ProductSearchFilter) -> Result<Vec<Product>> {
        trace!(%filter, "searching products");
        let found: Vec<Product> = self
            .read()
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();
        trace!(count = found.len(), "search complete");
        Ok(found)
    }

    fn add_products(&self, products: Option<Vec<Product>>) -> Result<Vec<Product>> {
        let result = products
            .ok_or_else(|| ProductError::InvalidInput("products".to_string()))
            .and_then(|new| {
                trace!(count = new.len(), "adding products");
                self.mutate(|all| {
                    all.extend(new);
                    Ok(all.clone())
                })
            });
        logged("add_products", result)
    }

    fn update_product(&self, id: &str, product: Option<Product>) -> Result<Product> {
        trace!(id, "updating product");
        let result = require(id, "id").and_then(|_| {
            let product = product.ok_or_else(|| ProductError::InvalidInput("product".to_string()))?;
            self.mutate(|all| {
                let index = find_index(all, id)?;
                all[index] = product;
                Ok(all[index].clone())
            })
        });
        logged("update_product", result)
    }

    fn add_feedback(&self, id: &str, tag: &str, score: i32) -> Result<Product> {
        trace!(id, tag, score, "adding feedback");
        let result = require(id, "id")
            .and_then(|_| require(tag, "tag"))
            .and_then(|_| {
                self.mutate(|all| {
                    let index = find_index(all, id)?;
                    all[index].push_feedback(tag, score);
                    Ok(all[index].clone())
                })
            });
        logged("add_feedback", result)
    }

    fn delete_product(&self, id: &str) -> Result<String> {
        trace!(id, "deleting product");
        let result = require(id, "id").and_then(|_| {
            self.mutate(|all| {
                let index = find_index(all, id)?;
                all.remove(index);
                Ok(id.to_string())
            })
        });
        logged("delete_product", result)
    }
}
