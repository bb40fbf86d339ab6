use crate::app::inspect::ResourceKind;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hcloud-inspect")]
#[command(about = "Render API response payloads as domain objects")]
pub struct CliConfig {
    #[arg(long, value_enum)]
    pub kind: ResourceKind,

    #[arg(long, default_value = "-", help = "Payload file, `-` for stdin")]
    pub input: String,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Reject unknown and malformed fields")]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
