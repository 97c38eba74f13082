use crate::domain::model::Resolution;
use crate::domain::ports::AddressLookup;
use async_trait::async_trait;

/// Address lookup through the operating system's resolver. A failing lookup,
/// whatever the cause, surfaces as `NotFound` — never as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDns;

#[async_trait]
impl AddressLookup for SystemDns {
    async fn lookup(&self, hostname: &str) -> Resolution {
        // lookup_host wants a (host, port) pair; the port is irrelevant here.
        match tokio::net::lookup_host((hostname, 0u16)).await {
            Ok(mut addrs) => match addrs.next() {
                Some(addr) => Resolution::Resolved(addr.ip()),
                None => Resolution::NotFound,
            },
            Err(_) => Resolution::NotFound,
        }
    }
}
