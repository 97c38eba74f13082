use crate::domain::model::OrderedFragment;
use crate::domain::ports::FragmentSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Ordered-concatenation sink backed by the local filesystem. Fragments
/// accumulate in memory; `commit` writes each target once, under `base_path`,
/// with its fragments sorted by `(order_key, seq)`.
pub struct ConcatSink {
    base_path: PathBuf,
    pending: Mutex<Vec<OrderedFragment>>,
}

impl ConcatSink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            pending: Mutex::new(Vec::new()),
        }
    }

    fn banner() -> String {
        format!(
            "# THIS FILE IS MANAGED BY HAFRAG. DO NOT EDIT.\n# Generated {}\n",
            chrono::Utc::now().to_rfc3339()
        )
    }
}

#[async_trait]
impl FragmentSink for ConcatSink {
    async fn submit(&self, fragment: OrderedFragment) -> Result<()> {
        tracing::debug!(
            "Queued fragment '{}' (seq {}) for '{}'",
            fragment.order_key,
            fragment.seq,
            fragment.target
        );
        self.pending.lock().unwrap().push(fragment);
        Ok(())
    }

    async fn commit(&self) -> Result<Vec<String>> {
        let pending = std::mem::take(&mut *self.pending.lock().unwrap());

        let mut by_target: BTreeMap<String, Vec<OrderedFragment>> = BTreeMap::new();
        for fragment in pending {
            by_target.entry(fragment.target.clone()).or_default().push(fragment);
        }

        let mut written = Vec::new();
        for (target, mut fragments) in by_target {
            // Stable sort: equal (order_key, seq) pairs keep submission order.
            fragments.sort_by(|a, b| {
                a.order_key
                    .cmp(&b.order_key)
                    .then_with(|| a.seq.cmp(&b.seq))
            });

            let mut content = Self::banner();
            for fragment in &fragments {
                content.push_str(&fragment.content);
            }

            let full_path = Path::new(&self.base_path).join(&target);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&full_path, content.as_bytes())?;

            tracing::debug!(
                "Wrote {} fragment(s) to {}",
                fragments.len(),
                full_path.display()
            );
            written.push(full_path.display().to_string());
        }

        Ok(written)
    }
}
