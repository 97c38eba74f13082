use crate::core::assembler::FragmentAssembler;
use crate::domain::model::Resolution;
use crate::domain::ports::{AddressLookup, ConfigProvider, FragmentSink, MemberCollector};
use crate::utils::error::Result;
use std::sync::Arc;

/// Orchestrates one run: resolve hostnames, assemble every section, then
/// commit the sink so each target file is written exactly once.
pub struct Engine<P, L, S, C>
where
    P: ConfigProvider,
    L: AddressLookup,
    S: FragmentSink,
    C: MemberCollector,
{
    config: P,
    lookup: L,
    sink: Arc<S>,
    assembler: FragmentAssembler<S, C>,
}

impl<P, L, S, C> Engine<P, L, S, C>
where
    P: ConfigProvider,
    L: AddressLookup,
    S: FragmentSink,
    C: MemberCollector,
{
    pub fn new(config: P, lookup: L, sink: Arc<S>, collector: Arc<C>) -> Self {
        let assembler = FragmentAssembler::new(
            Arc::clone(&sink),
            collector,
            config.default_target().to_string(),
        );
        Self {
            config,
            lookup,
            sink,
            assembler,
        }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Loading section definitions...");
        let mut specs = self.config.sections();
        tracing::info!("Loaded {} section(s)", specs.len());

        for spec in &mut specs {
            if spec.ipaddress.is_some() {
                continue;
            }
            let Some(host) = spec.host.clone() else {
                continue;
            };
            tracing::debug!("Resolving '{}' for section '{}'", host, spec.section_name);
            match self.lookup.lookup(&host).await {
                Resolution::Resolved(addr) => {
                    tracing::debug!("Resolved '{}' to {}", host, addr);
                    spec.ipaddress = Some(addr.to_string());
                }
                Resolution::NotFound => {
                    // Non-fatal: the section renders without an explicit
                    // address, exactly as if none had been requested.
                    tracing::warn!(
                        "Could not resolve '{}' for section '{}', leaving address unset",
                        host,
                        spec.section_name
                    );
                }
            }
        }

        let mut produced = 0;
        for spec in &specs {
            let fragments = self.assembler.assemble(spec).await?;
            produced += fragments.len();
        }
        tracing::info!("Produced {} fragment(s)", produced);

        let written = self.sink.commit().await?;
        tracing::info!("Wrote {} target file(s)", written.len());
        Ok(written)
    }
}
