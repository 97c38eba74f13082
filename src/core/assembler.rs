use crate::core::render;
use crate::domain::model::{FragmentSpec, OrderedFragment};
use crate::domain::ports::{FragmentSink, MemberCollector};
use crate::utils::error::{HafragError, Result};
use std::sync::Arc;

/// Turns one `FragmentSpec` into its ordered fragments and hands them to the
/// sink. A single linear pass: validate, resolve the target, render, submit,
/// then optionally trigger member collection.
pub struct FragmentAssembler<S: FragmentSink, C: MemberCollector> {
    sink: Arc<S>,
    collector: Arc<C>,
    default_target: String,
}

impl<S: FragmentSink, C: MemberCollector> FragmentAssembler<S, C> {
    pub fn new(sink: Arc<S>, collector: Arc<C>, default_target: impl Into<String>) -> Self {
        Self {
            sink,
            collector,
            default_target: default_target.into(),
        }
    }

    pub async fn assemble(&self, spec: &FragmentSpec) -> Result<Vec<OrderedFragment>> {
        Self::check_conflicts(spec)?;

        let target = spec.resolve_target(&self.default_target);
        let order_key = spec.order_key();
        tracing::debug!(
            "Assembling section '{}' at key '{}' for target '{}'",
            spec.section_name,
            order_key,
            target
        );

        let mut fragments = vec![OrderedFragment {
            order_key: order_key.clone(),
            seq: 0,
            target: target.clone(),
            content: render::render_logforward(spec),
        }];

        if spec.configure_ring {
            // Same order key; seq places the ring right after its section.
            fragments.push(OrderedFragment {
                order_key,
                seq: 1,
                target,
                content: render::render_ring(spec),
            });
        }

        for fragment in &fragments {
            self.sink.submit(fragment.clone()).await?;
        }

        if spec.collect_exported {
            tracing::debug!(
                "Collecting exported members tagged '{}'",
                spec.section_name
            );
            self.collector.collect(&spec.section_name).await?;
        }

        Ok(fragments)
    }

    /// The only defensive gate: a spec that sets both halves of a mutually
    /// exclusive pair is rejected before any fragment is produced.
    fn check_conflicts(spec: &FragmentSpec) -> Result<()> {
        if spec.ports.is_some() && !spec.bind.is_empty() {
            return Err(HafragError::ConflictError {
                section: spec.section_name.clone(),
                first: "ports",
                second: "bind",
            });
        }
        if spec.ipaddress.is_some() && !spec.bind.is_empty() {
            return Err(HafragError::ConflictError {
                section: spec.section_name.clone(),
                first: "ipaddress",
                second: "bind",
            });
        }
        Ok(())
    }
}
