pub mod pool;
pub mod postgres;
pub mod store;

pub use postgres::PgCatalogStore;
pub use store::CatalogStore;
