pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::sections::{build_sections, ALL_SECTIONS};
pub use config::{toml_config::TourConfig, OutputFormat};
pub use crate::core::tour::TourEngine;
pub use domain::model::Transcript;
pub use domain::optional::OptionalValue;
pub use domain::ports::{ConfigProvider, ExampleProtocol, Section};
pub use utils::error::{Result, TourError};
