use crate::app::sections::ALL_SECTIONS;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub tour: TourInfo,
    pub errors: ErrorsConfig,
    pub fridge: FridgeConfig,
    pub concurrency: ConcurrencyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TourInfo {
    pub name: String,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorsConfig {
    pub printers: Vec<String>,
    pub first_job: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FridgeConfig {
    pub contents: Vec<String>,
    pub lookup: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcurrencyConfig {
    pub server: String,
}

impl Default for TourInfo {
    fn default() -> Self {
        Self {
            name: "guided-tour".to_string(),
            sections: ALL_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            printers: vec![
                "Bi Sheng".to_string(),
                "Gutenberg".to_string(),
                "Mergenthaler".to_string(),
                "Never Has Toner".to_string(),
            ],
            first_job: 1040,
        }
    }
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            contents: vec!["milk".to_string(), "eggs".to_string(), "leftovers".to_string()],
            lookup: "banana".to_string(),
        }
    }
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            server: "primary".to_string(),
        }
    }
}

impl TourConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TourError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TourError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TOUR_SERVER})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TourError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("tour.name", &self.tour.name)?;
        validation::validate_non_empty_list("tour.sections", &self.tour.sections)?;
        validation::validate_known_names("tour.sections", &self.tour.sections, &ALL_SECTIONS)?;
        validation::validate_non_empty_list("errors.printers", &self.errors.printers)?;
        validation::validate_range("errors.first_job", self.errors.first_job, 1, 9999)?;
        validation::validate_non_empty_string("fridge.lookup", &self.fridge.lookup)?;
        validation::validate_non_empty_string("concurrency.server", &self.concurrency.server)?;
        Ok(())
    }
}

impl ConfigProvider for TourConfig {
    fn sections(&self) -> &[String] {
        &self.tour.sections
    }

    fn printer_names(&self) -> &[String] {
        &self.errors.printers
    }

    fn first_job(&self) -> u32 {
        self.errors.first_job
    }

    fn fridge_contents(&self) -> &[String] {
        &self.fridge.contents
    }

    fn fridge_lookup(&self) -> &str {
        &self.fridge.lookup
    }

    fn server(&self) -> &str {
        &self.concurrency.server
    }
}

impl Validate for TourConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TourConfig::from_toml_str("").unwrap();
        assert_eq!(config.tour.sections.len(), ALL_SECTIONS.len());
        assert_eq!(config.server(), "primary");
        assert_eq!(config.fridge_lookup(), "banana");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[tour]
name = "short-tour"
sections = ["protocols", "error_handling"]

[errors]
printers = ["Gutenberg", "On Fire"]
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tour.name, "short-tour");
        assert_eq!(config.sections(), ["protocols".to_string(), "error_handling".to_string()]);
        assert_eq!(config.printer_names().len(), 2);
        assert_eq!(config.first_job(), 1040);
        assert_eq!(config.fridge_contents().len(), 3);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GUIDED_TOUR_TEST_SERVER", "secondary");

        let toml_content = r#"
[concurrency]
server = "${GUIDED_TOUR_TEST_SERVER}"
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server(), "secondary");

        std::env::remove_var("GUIDED_TOUR_TEST_SERVER");
    }

    #[test]
    fn test_unknown_section_fails_validation() {
        let toml_content = r#"
[tour]
sections = ["generics", "macros"]
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(TourError::InvalidConfigValueError { ref value, .. }) if value == "macros"
        ));
    }

    #[test]
    fn test_job_number_out_of_range() {
        let config = TourConfig::from_toml_str("[errors]\nfirst_job = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = TourConfig::from_toml_str("[tour\nname = ");
        assert!(matches!(result, Err(TourError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[fridge]\ncontents = [\"banana\"]\nlookup = \"banana\"\n")
            .unwrap();

        let config = TourConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.fridge_contents(), ["banana".to_string()]);
    }
}
