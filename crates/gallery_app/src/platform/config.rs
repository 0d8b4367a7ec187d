//! Command-line and environment configuration for the `gallery` binary.

use std::path::PathBuf;

use clap::Parser;
use gallery_core::{DownloadVariant, DEFAULT_QUERY};
use gallery_engine::{ApiSettings, DownloadSettings, EngineConfig, DEFAULT_ENDPOINT};
use log::LevelFilter;

use super::logging::LogDestination;

/// Search and download photos from the terminal.
#[derive(Debug, Parser)]
#[command(name = "gallery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API access key sent as `client_id` on every search.
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Photo search endpoint.
    #[arg(long, env = "GALLERY_API_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Query searched at startup.
    #[arg(long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Directory downloaded images are saved to.
    #[arg(long, env = "GALLERY_DOWNLOAD_DIR", default_value = "downloads")]
    pub download_dir: PathBuf,

    /// Image size used by `:download` (small, regular, full, raw).
    #[arg(long, default_value = "regular", value_parser = parse_variant)]
    pub variant: DownloadVariant,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log_to: LogDestination,

    /// Log file used when logging to a file.
    #[arg(long, default_value = "gallery.log")]
    pub log_file: PathBuf,

    /// Maximum log level.
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            api: ApiSettings {
                endpoint: self.endpoint.clone(),
                client_id: self.client_id.clone(),
                ..ApiSettings::default()
            },
            downloads: DownloadSettings::new(self.download_dir.clone()),
        }
    }
}

fn parse_variant(raw: &str) -> Result<DownloadVariant, String> {
    DownloadVariant::from_label(raw)
        .ok_or_else(|| format!("unknown variant {raw:?}; expected small, regular, full or raw"))
}
