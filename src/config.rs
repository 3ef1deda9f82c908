//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str =
    "https://nle09wp9zb.execute-api.ap-south-1.amazonaws.com/sentiment";

const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, Parser)]
#[command(name = "sentitty", version, about = "Sentiment analysis with a live iridescent background")]
pub struct Cli {
    /// Sentiment service endpoint (POST {"text": ...})
    #[arg(long, env = "SENTITTY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Give up on a request after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Background frame rate
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Where to write logs; the terminal belongs to the UI
    #[arg(long, default_value = "sentitty.log")]
    pub log_file: PathBuf,

    /// Analyze TEXT, print the result and exit without starting the UI
    #[arg(long, value_name = "TEXT")]
    pub print: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("--fps must be between 1 and 240, got {0}")]
    FrameRate(u32),
    #[error("--api-url must not be empty")]
    EmptyApiUrl,
    #[error("--timeout-secs must be greater than zero")]
    ZeroTimeout,
}

impl Cli {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::FrameRate(self.fps));
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
