pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{ConcatSink, DirectoryCollector, SystemDns};
pub use crate::core::assembler::FragmentAssembler;
pub use crate::core::engine::Engine;
pub use crate::domain::model::{FragmentSpec, OrderedFragment, Resolution};
pub use crate::utils::error::{HafragError, Result};
