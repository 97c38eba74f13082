pub mod assembler;
pub mod engine;
pub mod render;

pub use crate::domain::model::{FragmentSpec, OrderedFragment, Resolution};
pub use crate::domain::ports::{AddressLookup, ConfigProvider, FragmentSink, MemberCollector};
pub use crate::utils::error::Result;
