pub mod key;
pub mod store;

pub use key::derive_key;
pub use store::CacheStore;
