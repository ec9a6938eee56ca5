// Adapters layer: concrete implementations for external systems (MongoDB, in-memory storage, HTTP).

pub mod http;
pub mod storage;
