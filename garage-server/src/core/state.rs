use std::sync::Arc;

use crate::booking::BookingManager;
use crate::catalog::ShopCatalog;
use crate::core::{Config, Result};
use crate::data::{BusinessDataSource, FixtureStore};
use crate::session::SessionStore;

/// Server state - shared handles to every service
///
/// `ServerState` is cloned into each request handler; all members are
/// shallow `Arc` clones. It replaces what the product kept in ambient
/// context providers: the session user and favorites are an explicit
/// handle here, hydrated from disk on open and cleared on logout.
///
/// | Field | Type | Purpose |
/// |-------|------|---------|
/// | config | Config | Immutable configuration |
/// | bookings | Arc<BookingManager> | Appointment lifecycle + calendar |
/// | shops | Arc<ShopCatalog> | Partner shop reference data |
/// | data | Arc<dyn BusinessDataSource> | Business records boundary |
/// | session | SessionStore | Login user + favorite shops (redb) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub bookings: Arc<BookingManager>,
    pub shops: Arc<ShopCatalog>,
    pub data: Arc<dyn BusinessDataSource>,
    pub session: SessionStore,
}

impl ServerState {
    /// Initialize all services from configuration
    ///
    /// Creates the working directory layout, opens the redb stores, and
    /// seeds demo data in the development environment.
    pub fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let bookings = BookingManager::new(config.booking_db_path(), config.timezone)?;
        let session = SessionStore::open(config.session_db_path())?;
        let shops = ShopCatalog::partner_catalog();

        let data = if config.is_development() {
            FixtureStore::seeded()
        } else {
            FixtureStore::empty()
        };

        if config.is_development() {
            let seeded = bookings.seed_demo()?;
            if seeded > 0 {
                tracing::info!(seeded, "Seeded demo appointments");
            }
        }

        Ok(Self {
            config: config.clone(),
            bookings: Arc::new(bookings),
            shops: Arc::new(shops),
            data: Arc::new(data),
            session,
        })
    }

    /// In-memory state for router-level tests
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use crate::booking::BookingStorage;

        let storage = BookingStorage::open_in_memory().expect("in-memory booking storage");
        let bookings = BookingManager::with_storage(storage);
        bookings.seed_demo().expect("seed demo appointments");

        Self {
            config: Config::with_overrides("/tmp/garage-test", 0),
            bookings: Arc::new(bookings),
            shops: Arc::new(ShopCatalog::partner_catalog()),
            data: Arc::new(FixtureStore::seeded()),
            session: SessionStore::open_in_memory().expect("in-memory session storage"),
        }
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("bookings", &"<BookingManager>")
            .field("data", &"<BusinessDataSource>")
            .finish()
    }
}
