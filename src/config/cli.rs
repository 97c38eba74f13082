use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hafrag")]
#[command(about = "Generates HAProxy log-forward config fragments and merges them in order")]
pub struct CliConfig {
    #[arg(long, default_value = "./hafrag.toml")]
    pub config: String,

    #[arg(long, help = "Override the output directory from the config file")]
    pub output_dir: Option<String>,

    #[arg(long, help = "Override the exported-member registry directory")]
    pub registry_dir: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("config", &self.config)?;
        validation::validate_file_extensions("config", &[self.config.clone()], &["toml"])?;

        if let Some(dir) = &self.output_dir {
            validation::validate_path("output_dir", dir)?;
        }
        if let Some(dir) = &self.registry_dir {
            validation::validate_path("registry_dir", dir)?;
        }

        Ok(())
    }
}
