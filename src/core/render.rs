//! Pure text renderers for the two block kinds. No I/O, no clock: the same
//! spec always renders to the same text.

use crate::domain::model::FragmentSpec;

/// Renders the `log-forward <name>` block.
pub fn render_logforward(spec: &FragmentSpec) -> String {
    let mut lines = vec![String::new(), format!("log-forward {}", spec.section_name)];

    for (addr, opts) in &spec.bind {
        if opts.is_empty() {
            lines.push(format!("  bind {}", addr));
        } else {
            lines.push(format!("  bind {} {}", addr, opts.join(" ")));
        }
    }

    if let Some(ports) = &spec.ports {
        let address = spec.ipaddress.as_deref().unwrap_or("0.0.0.0");
        for port in ports.split(',') {
            lines.push(format!("  dgram-bind {}:{}", address, port.trim()));
        }
    }

    let mut directives: Vec<(String, String)> = Vec::new();
    let opts = &spec.options;
    for target in &opts.log {
        directives.push(("log".to_string(), format!("log {}", target)));
    }
    if let Some(v) = opts.maxconn {
        directives.push(("maxconn".to_string(), format!("maxconn {}", v)));
    }
    if let Some(v) = opts.backlog {
        directives.push(("backlog".to_string(), format!("backlog {}", v)));
    }
    if let Some(v) = &opts.timeout_client {
        directives.push(("timeout client".to_string(), format!("timeout client {}", v)));
    }

    push_directives(&mut lines, directives, spec.sort_alphabetic);
    lines.join("\n") + "\n"
}

/// Renders the `ring <name>` block referenced by the log-forward section.
/// The ring shares the section's name, which is what a `log ring@<name>`
/// directive in the log-forward block resolves against.
pub fn render_ring(spec: &FragmentSpec) -> String {
    let mut lines = vec![String::new(), format!("ring {}", spec.section_name)];

    let mut directives: Vec<(String, String)> = Vec::new();
    let ring = &spec.ring_options;
    if let Some(v) = &ring.description {
        directives.push(("description".to_string(), format!("description \"{}\"", v)));
    }
    if let Some(v) = &ring.format {
        directives.push(("format".to_string(), format!("format {}", v)));
    }
    if let Some(v) = ring.maxlen {
        directives.push(("maxlen".to_string(), format!("maxlen {}", v)));
    }
    if let Some(v) = &ring.size {
        directives.push(("size".to_string(), format!("size {}", v)));
    }
    if let Some(v) = &ring.timeout_connect {
        directives.push((
            "timeout connect".to_string(),
            format!("timeout connect {}", v),
        ));
    }
    if let Some(v) = &ring.timeout_server {
        directives.push((
            "timeout server".to_string(),
            format!("timeout server {}", v),
        ));
    }
    for server in &ring.servers {
        directives.push(("server".to_string(), format!("server {}", server)));
    }

    push_directives(&mut lines, directives, spec.sort_alphabetic);
    lines.join("\n") + "\n"
}

fn push_directives(lines: &mut Vec<String>, mut directives: Vec<(String, String)>, sort: bool) {
    if sort {
        // Stable: directives sharing a name (log, server) keep their
        // declaration order.
        directives.sort_by(|a, b| a.0.cmp(&b.0));
    }
    for (_, line) in directives {
        lines.push(format!("  {}", line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LogForwardOptions, RingOptions};

    fn base_spec() -> FragmentSpec {
        FragmentSpec {
            section_name: "lb1".to_string(),
            sort_alphabetic: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_logforward_renders_dgram_bind_per_port() {
        let mut spec = base_spec();
        spec.ipaddress = Some("10.0.0.5".to_string());
        spec.ports = Some("514,515".to_string());

        let out = render_logforward(&spec);
        assert!(out.contains("log-forward lb1"));
        assert!(out.contains("  dgram-bind 10.0.0.5:514"));
        assert!(out.contains("  dgram-bind 10.0.0.5:515"));
    }

    #[test]
    fn test_logforward_defaults_address_when_only_ports_given() {
        let mut spec = base_spec();
        spec.ports = Some("514".to_string());

        let out = render_logforward(&spec);
        assert!(out.contains("  dgram-bind 0.0.0.0:514"));
    }

    #[test]
    fn test_logforward_renders_bind_with_options() {
        let mut spec = base_spec();
        spec.bind.insert(
            "192.168.0.1:9000".to_string(),
            vec!["ssl".to_string(), "crt /etc/cert.pem".to_string()],
        );
        spec.bind.insert("10.0.0.1:9001".to_string(), vec![]);

        let out = render_logforward(&spec);
        assert!(out.contains("  bind 192.168.0.1:9000 ssl crt /etc/cert.pem"));
        assert!(out.contains("  bind 10.0.0.1:9001\n"));
    }

    #[test]
    fn test_logforward_sorts_directives_alphabetically() {
        let mut spec = base_spec();
        spec.options = LogForwardOptions {
            log: vec!["global".to_string()],
            maxconn: Some(100),
            backlog: Some(10),
            timeout_client: None,
        };

        let out = render_logforward(&spec);
        let backlog = out.find("backlog 10").unwrap();
        let log = out.find("log global").unwrap();
        let maxconn = out.find("maxconn 100").unwrap();
        assert!(backlog < log && log < maxconn);
    }

    #[test]
    fn test_logforward_keeps_declaration_order_when_not_sorting() {
        let mut spec = base_spec();
        spec.sort_alphabetic = false;
        spec.options = LogForwardOptions {
            log: vec!["global".to_string()],
            maxconn: None,
            backlog: Some(10),
            timeout_client: None,
        };

        let out = render_logforward(&spec);
        let log = out.find("log global").unwrap();
        let backlog = out.find("backlog 10").unwrap();
        assert!(log < backlog);
    }

    #[test]
    fn test_ring_renders_directives_and_servers() {
        let mut spec = base_spec();
        spec.ring_options = RingOptions {
            description: Some("buffer for lb1".to_string()),
            format: Some("rfc5424".to_string()),
            maxlen: Some(1200),
            size: Some("32764".to_string()),
            timeout_connect: Some("5s".to_string()),
            timeout_server: Some("10s".to_string()),
            servers: vec!["mysyslog 10.0.0.10:6514".to_string()],
        };

        let out = render_ring(&spec);
        assert!(out.contains("ring lb1"));
        assert!(out.contains("  description \"buffer for lb1\""));
        assert!(out.contains("  format rfc5424"));
        assert!(out.contains("  maxlen 1200"));
        assert!(out.contains("  size 32764"));
        assert!(out.contains("  timeout connect 5s"));
        assert!(out.contains("  timeout server 10s"));
        assert!(out.contains("  server mysyslog 10.0.0.10:6514"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut spec = base_spec();
        spec.ports = Some("514".to_string());
        spec.options.log = vec!["global".to_string()];

        assert_eq!(render_logforward(&spec), render_logforward(&spec));
        assert_eq!(render_ring(&spec), render_ring(&spec));
    }
}
