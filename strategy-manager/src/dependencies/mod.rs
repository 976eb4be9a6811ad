mod adapter;
pub use adapter::AdapterClient;
