pub mod store;

pub use store::IReadinessStore;
