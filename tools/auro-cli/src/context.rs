//! CLI execution context.
//!
//! A [`Context`] is one application session: it opens the storage backend
//! once, mounts the cart provider on it, and hands both to every command.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, Result};
use auro_cache::{Cache, FileStore, KvStore, MemoryStore};
use auro_commerce::admin::{CustomerBook, OrderBook, PaymentBook, ProductBook};
use auro_commerce::cart::{CartContext, CartProvider};
use auro_commerce::catalog::Catalog;
use chrono::Utc;

use crate::config::{AuroConfig, Backend};
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["auro.toml", ".auro.toml", "auro.json"];

/// Session-wide options from the command line.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub config_path: Option<String>,
    pub profile: Option<String>,
    pub ephemeral: bool,
}

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: AuroConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// The read-only catalog.
    pub catalog: Catalog,
    /// Storage for this browsing context.
    pub cache: Cache,
    cart: CartProvider,
}

impl Context {
    /// Resolve the config: an explicit path must load, otherwise search upward.
    pub fn load_config(config_path: Option<&str>, cwd: &Path) -> Result<AuroConfig> {
        match config_path {
            Some(path) => AuroConfig::load(path),
            None => Ok(Self::find_config(cwd).unwrap_or_default()),
        }
    }

    /// Build a session from an already loaded config.
    pub fn open(
        config: AuroConfig,
        options: &SessionOptions,
        output: Output,
        cwd: PathBuf,
    ) -> Result<Self> {
        let store: Rc<dyn KvStore> = if options.ephemeral || config.storage.backend == Backend::Memory {
            tracing::debug!("using in-memory storage");
            Rc::new(MemoryStore::new())
        } else {
            let dir = config
                .storage
                .dir
                .as_ref()
                .map(|dir| resolve_path(&cwd, dir))
                .unwrap_or_else(|| dirs_path().join("auro"));
            let store = FileStore::open(dir.clone())
                .with_context(|| format!("Failed to open storage at {}", dir.display()))?;
            Rc::new(store)
        };

        let namespace = options
            .profile
            .clone()
            .or_else(|| config.storage.namespace.clone())
            .unwrap_or_default();
        let cache = Cache::from_shared(store).with_namespace(namespace);
        let cart = CartProvider::mount(cache.clone());

        Ok(Self {
            config,
            output,
            cwd,
            catalog: Catalog::sample(),
            cache,
            cart,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<AuroConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match AuroConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// A handle to the session cart.
    pub fn cart(&self) -> CartContext {
        self.cart.context()
    }

    /// Open the admin console ledgers on the session storage.
    pub fn admin(&self) -> AdminBooks {
        let now = Utc::now();
        let orders = OrderBook::open(self.cache.clone(), &self.catalog, now);
        let customers = CustomerBook::open(self.cache.clone(), orders.orders());
        AdminBooks {
            payments: PaymentBook::open(self.cache.clone(), now),
            products: ProductBook::open(self.cache.clone(), &self.catalog),
            orders,
            customers,
        }
    }
}

/// The admin console's persisted lists.
pub struct AdminBooks {
    pub orders: OrderBook,
    pub payments: PaymentBook,
    pub customers: CustomerBook,
    pub products: ProductBook,
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
