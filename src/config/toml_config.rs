use crate::domain::model::{FragmentSpec, LogForwardOptions, RingOptions};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HafragError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectConfig,
    pub output: OutputConfig,
    pub registry: Option<RegistryConfig>,
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    #[serde(default = "default_target")]
    pub default_target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub directory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    pub instance: Option<String>,
    pub target: Option<String>,
    pub host: Option<String>,
    pub ipaddress: Option<String>,
    pub ports: Option<String>,
    #[serde(default)]
    pub bind: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub options: LogForwardOptions,
    #[serde(default, rename = "ring")]
    pub ring_options: RingOptions,
    #[serde(default = "default_true")]
    pub sort_alphabetic: bool,
    #[serde(default)]
    pub collect_exported: bool,
    #[serde(default)]
    pub configure_ring: bool,
}

fn default_target() -> String {
    "haproxy.cfg".to_string()
}

fn default_true() -> bool {
    true
}

impl SectionConfig {
    pub fn to_spec(&self) -> FragmentSpec {
        FragmentSpec {
            section_name: self.name.clone(),
            instance: self.instance.clone(),
            target_override: self.target.clone(),
            host: self.host.clone(),
            ipaddress: self.ipaddress.clone(),
            ports: self.ports.clone(),
            bind: self.bind.clone(),
            options: self.options.clone(),
            ring_options: self.ring_options.clone(),
            sort_alphabetic: self.sort_alphabetic,
            collect_exported: self.collect_exported,
            configure_ring: self.configure_ring,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HafragError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HafragError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Sanity checks the mutual-exclusivity rules are *not* enforced here;
    /// that gate belongs to the assembler, which rejects conflicting specs
    /// before producing output.
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("output.directory", &self.output.directory)?;
        validation::validate_non_empty_string("output.default_target", &self.output.default_target)?;

        let mut seen = HashSet::new();
        for section in &self.sections {
            validation::validate_non_empty_string("section.name", &section.name)?;

            if !seen.insert(&section.name) {
                return Err(HafragError::InvalidConfigValueError {
                    field: "section.name".to_string(),
                    value: section.name.clone(),
                    reason: "Duplicate section name".to_string(),
                });
            }

            if let Some(ports) = &section.ports {
                validation::validate_ports("section.ports", ports)?;
            }
            if let Some(maxconn) = section.options.maxconn {
                validation::validate_positive_number("section.options.maxconn", maxconn as usize, 1)?;
            }
        }

        // Collection needs somewhere to collect from.
        if self.sections.iter().any(|s| s.collect_exported) {
            validation::validate_required_field("registry.directory", &self.registry)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn default_target(&self) -> &str {
        &self.output.default_target
    }

    fn registry_dir(&self) -> Option<&str> {
        self.registry.as_ref().map(|r| r.directory.as_str())
    }

    fn sections(&self) -> Vec<FragmentSpec> {
        self.sections.iter().map(SectionConfig::to_spec).collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
