use crate::domain::model::{BalancerMember, OrderedFragment};
use crate::domain::ports::{FragmentSink, MemberCollector};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Collects balancer members registered by other nodes as JSON files in a
/// registry directory. Entries whose `tags` include the requested tag are
/// rendered as `server` lines and submitted at order keys `20-<tag>-NN`,
/// placing them after the section blocks of the same name.
pub struct DirectoryCollector<S: FragmentSink> {
    registry_dir: PathBuf,
    default_target: String,
    sink: Arc<S>,
}

impl<S: FragmentSink> DirectoryCollector<S> {
    pub fn new(
        registry_dir: impl Into<PathBuf>,
        default_target: impl Into<String>,
        sink: Arc<S>,
    ) -> Self {
        Self {
            registry_dir: registry_dir.into(),
            default_target: default_target.into(),
            sink,
        }
    }

    fn render_member(member: &BalancerMember) -> String {
        if member.options.is_empty() {
            format!("  server {} {}:{}\n", member.name, member.address, member.port)
        } else {
            format!(
                "  server {} {}:{} {}\n",
                member.name,
                member.address,
                member.port,
                member.options.join(" ")
            )
        }
    }
}

#[async_trait]
impl<S: FragmentSink> MemberCollector for DirectoryCollector<S> {
    async fn collect(&self, tag: &str) -> Result<()> {
        if !self.registry_dir.is_dir() {
            // Nothing registered yet.
            tracing::debug!(
                "Registry directory {} does not exist, nothing to collect",
                self.registry_dir.display()
            );
            return Ok(());
        }

        let mut members = Vec::new();
        for entry in fs::read_dir(&self.registry_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read_to_string(&path)?;
            let member: BalancerMember = serde_json::from_str(&data)?;
            if member.tags.iter().any(|t| t == tag) {
                members.push(member);
            }
        }

        // Directory iteration order is not deterministic; member name is.
        members.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!("Collected {} member(s) tagged '{}'", members.len(), tag);

        for (index, member) in members.iter().enumerate() {
            let target = member
                .target
                .clone()
                .unwrap_or_else(|| self.default_target.clone());
            self.sink
                .submit(OrderedFragment {
                    order_key: format!("20-{}-{:02}", tag, index),
                    seq: 0,
                    target,
                    content: Self::render_member(member),
                })
                .await?;
        }

        Ok(())
    }
}
