use hafrag::domain::ports::ConfigProvider;
use hafrag::{ConcatSink, DirectoryCollector, Engine, SystemDns, TomlConfig};
use std::sync::Arc;
use tempfile::TempDir;

fn run_engine(
    config: TomlConfig,
    output_dir: &std::path::Path,
    registry_dir: &std::path::Path,
) -> (
    Engine<TomlConfig, SystemDns, ConcatSink, DirectoryCollector<ConcatSink>>,
    Arc<ConcatSink>,
) {
    let sink = Arc::new(ConcatSink::new(output_dir));
    let collector = Arc::new(DirectoryCollector::new(
        registry_dir,
        config.default_target().to_string(),
        Arc::clone(&sink),
    ));
    (
        Engine::new(config, SystemDns, Arc::clone(&sink), collector),
        sink,
    )
}

#[tokio::test]
async fn test_end_to_end_section_with_ring() {
    let out_dir = TempDir::new().unwrap();
    let registry_dir = TempDir::new().unwrap();

    let toml_content = r#"
[project]
name = "edge-logs"

[output]
directory = "unused-here"

[[section]]
name = "lb1"
ports = "514"
configure_ring = true
collect_exported = false

[section.options]
log = ["global"]

[section.ring]
format = "rfc5424"
"#;

    let config = TomlConfig::from_toml_str(toml_content).unwrap();
    let (engine, _) = run_engine(config, out_dir.path(), registry_dir.path());

    let written = engine.run().await.unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("haproxy.cfg"));

    let content = std::fs::read_to_string(&written[0]).unwrap();
    assert!(content.starts_with("# THIS FILE IS MANAGED BY HAFRAG"));
    assert!(content.contains("log-forward lb1"));
    assert!(content.contains("  dgram-bind 0.0.0.0:514"));
    assert!(content.contains("  log global"));
    assert!(content.contains("ring lb1"));
    assert!(content.contains("  format rfc5424"));

    // The ring block follows its log-forward block.
    let forward = content.find("log-forward lb1").unwrap();
    let ring = content.find("ring lb1").unwrap();
    assert!(forward < ring);
}

#[tokio::test]
async fn test_sections_merge_in_lexicographic_name_order() {
    let out_dir = TempDir::new().unwrap();
    let registry_dir = TempDir::new().unwrap();

    // Declared out of order on purpose.
    let toml_content = r#"
[project]
name = "edge-logs"

[output]
directory = "unused-here"

[[section]]
name = "zz-last"
ports = "516"

[[section]]
name = "aa-first"
ports = "514"

[[section]]
name = "mm-middle"
ports = "515"
"#;

    let config = TomlConfig::from_toml_str(toml_content).unwrap();
    let (engine, _) = run_engine(config, out_dir.path(), registry_dir.path());

    let written = engine.run().await.unwrap();
    let content = std::fs::read_to_string(&written[0]).unwrap();

    let first = content.find("log-forward aa-first").unwrap();
    let middle = content.find("log-forward mm-middle").unwrap();
    let last = content.find("log-forward zz-last").unwrap();
    assert!(first < middle && middle < last);
}

#[tokio::test]
async fn test_instance_sections_write_separate_targets() {
    let out_dir = TempDir::new().unwrap();
    let registry_dir = TempDir::new().unwrap();

    let toml_content = r#"
[project]
name = "edge-logs"

[output]
directory = "unused-here"

[[section]]
name = "lb1"
ports = "514"

[[section]]
name = "lb2"
instance = "edge"
ports = "515"
"#;

    let config = TomlConfig::from_toml_str(toml_content).unwrap();
    let (engine, _) = run_engine(config, out_dir.path(), registry_dir.path());

    let written = engine.run().await.unwrap();
    assert_eq!(written.len(), 2);

    let default = std::fs::read_to_string(out_dir.path().join("haproxy.cfg")).unwrap();
    let edge =
        std::fs::read_to_string(out_dir.path().join("haproxy-edge/haproxy-edge.cfg")).unwrap();
    assert!(default.contains("log-forward lb1"));
    assert!(!default.contains("log-forward lb2"));
    assert!(edge.contains("log-forward lb2"));
}

#[tokio::test]
async fn test_unresolvable_host_renders_without_address() {
    let out_dir = TempDir::new().unwrap();
    let registry_dir = TempDir::new().unwrap();

    let toml_content = r#"
[project]
name = "edge-logs"

[output]
directory = "unused-here"

[[section]]
name = "lb1"
host = "no-such-host.invalid"
ports = "514"
"#;

    let config = TomlConfig::from_toml_str(toml_content).unwrap();
    let (engine, _) = run_engine(config, out_dir.path(), registry_dir.path());

    // NotFound is non-fatal; the section falls back to the wildcard address.
    let written = engine.run().await.unwrap();
    let content = std::fs::read_to_string(&written[0]).unwrap();
    assert!(content.contains("  dgram-bind 0.0.0.0:514"));
}
