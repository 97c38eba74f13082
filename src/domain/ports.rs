use crate::domain::model::{FragmentSpec, OrderedFragment, Resolution};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Hostname to address lookup. Infallible by contract: any failure of the
/// underlying resolver collapses into `Resolution::NotFound`.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup(&self, hostname: &str) -> Resolution;
}

/// Ordered-concatenation sink. Fragments accumulate via `submit`; `commit`
/// writes every target file exactly once, its fragments sorted ascending by
/// `(order_key, seq)`, and returns the written paths.
#[async_trait]
pub trait FragmentSink: Send + Sync {
    async fn submit(&self, fragment: OrderedFragment) -> Result<()>;
    async fn commit(&self) -> Result<Vec<String>>;
}

/// Collection of balancer members registered elsewhere under a tag.
/// Side-effecting; the caller observes no result beyond success.
#[async_trait]
pub trait MemberCollector: Send + Sync {
    async fn collect(&self, tag: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn default_target(&self) -> &str;
    fn registry_dir(&self) -> Option<&str>;
    fn sections(&self) -> Vec<FragmentSpec>;
}
