pub mod atomic;
pub mod source;

pub use atomic::write_atomic;
pub use source::SourceStore;
