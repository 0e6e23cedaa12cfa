use anyhow::{bail, Context, Result};

use crate::frames::pipeline::RenderMode;

const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Rendering provider account settings.
///
/// Every field is optional: missing credentials are reported by the first
/// provider call, not at startup.
#[derive(Debug, Clone, Default)]
pub struct CloudinaryConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub api_base: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub cloudinary: CloudinaryConfig,
    pub render_mode: RenderMode,
    /// Include the error source chain as `details` in failure bodies.
    pub expose_error_details: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cloudinary: CloudinaryConfig {
                cloud_name: optional_env("CLOUDINARY_CLOUD_NAME"),
                api_key: optional_env("CLOUDINARY_API_KEY"),
                api_secret: optional_env("CLOUDINARY_API_SECRET"),
                api_base: optional_env("CLOUDINARY_API_BASE")
                    .unwrap_or_else(|| DEFAULT_CLOUDINARY_API_BASE.to_string()),
            },
            render_mode: optional_env("FRAME_RENDER_MODE")
                .map(|v| v.parse::<RenderMode>())
                .transpose()
                .context("FRAME_RENDER_MODE must be 'sequential' or 'concurrent'")?
                .unwrap_or_default(),
            expose_error_details: optional_env("EXPOSE_ERROR_DETAILS")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("EXPOSE_ERROR_DETAILS must be a boolean")?
                .unwrap_or(true),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised boolean '{other}'"),
    }
}
