//! 运行配置

use crate::graph::VertexId;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 默认矩阵文件
pub const DEFAULT_MATRIX_PATH: &str = "matrix.txt";

/// 报告输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// 方括号数组形式的纯文本
    #[default]
    Plain,
    /// 表格
    Table,
    /// JSON 文档
    Json,
}

/// 报告配置
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 邻接矩阵文件
    pub matrix_path: PathBuf,
    /// 起始顶点；未指定时交互式询问
    pub start: Option<VertexId>,
    pub format: ReportFormat,
    /// 是否给标题着色
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            matrix_path: PathBuf::from(DEFAULT_MATRIX_PATH),
            start: None,
            format: ReportFormat::default(),
            color: false,
        }
    }
}

impl ReportConfig {
    pub fn with_start(mut self, start: VertexId) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// JSON 输出时提示信息不能写到 stdout
    pub fn prompt_on_stderr(&self) -> bool {
        self.format == ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.matrix_path, PathBuf::from("matrix.txt"));
        assert_eq!(config.start, None);
        assert_eq!(config.format, ReportFormat::Plain);
        assert!(!config.prompt_on_stderr());
    }

    #[test]
    fn test_builder() {
        let config = ReportConfig::default()
            .with_start(3)
            .with_format(ReportFormat::Json);
        assert_eq!(config.start, Some(3));
        assert!(config.prompt_on_stderr());
    }

    #[test]
    fn test_format_value_enum() {
        assert_eq!(ReportFormat::from_str("table", true), Ok(ReportFormat::Table));
        assert!(ReportFormat::from_str("xml", true).is_err());
    }
}
