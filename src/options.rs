// src/options.rs
use clap::ValueEnum;
use tabcsv_engine::options::LineEnding;

/// 実行結果レポートの出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliLineEnding {
    Lf,
    Crlf,
}

impl From<CliLineEnding> for LineEnding {
    fn from(value: CliLineEnding) -> Self {
        match value {
            CliLineEnding::Lf => Self::Lf,
            CliLineEnding::Crlf => Self::Crlf,
        }
    }
}
