// Adapters layer: concrete implementations for external systems (system
// resolver, filesystem sink, exported-member registry).

pub mod concat;
pub mod dns;
pub mod exported;

pub use concat::ConcatSink;
pub use dns::SystemDns;
pub use exported::DirectoryCollector;
