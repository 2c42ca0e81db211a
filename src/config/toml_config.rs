use crate::utils::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選用的 TOML 設定檔：scheme 詮釋資料與輸入輸出路徑，
/// 所有欄位皆可省略，省略者由 CLI 或內建預設值補上
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scheme: Option<SchemeSection>,
    pub input: Option<FileSection>,
    pub output: Option<FileSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemeSection {
    pub title: Option<String>,
    pub description: Option<String>,
    pub base_uri: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileSection {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConvertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.as_ref().and_then(|s| s.path.as_deref())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|s| s.path.as_deref())
    }
}
