// Adapters layer: concrete implementations of the domain ports for the network and the disk.

pub mod http;
pub mod storage;

pub use http::ReqwestHttpClient;
pub use storage::LocalStorageAdapter;
