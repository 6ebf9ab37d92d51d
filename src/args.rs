// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};

use crate::options::{CliLineEnding, ReportFormat};
use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "tabcsv",
    version = crate::VERSION,
    about = "タブ区切りログ(.txt)をCSVへ一括変換するツール",
    long_about = "指定フォルダ直下の .txt ファイルごとに、ヘッダー行(既定: 4行目)から列を取得し、\n\
                  メタデータ行(既定: 1,2,3,5行目)を除いたデータ行を同名の .csv として書き出します。\n\
                  各行の先頭列(行ラベル)は出力されません。"
)]
pub struct Args {
    /// 変換対象フォルダ（直下のみ、再帰しない）
    #[arg(value_hint = ValueHint::DirPath)]
    pub target_dir: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

/// Input parsing options
#[derive(ClapArgs, Debug, Default)]
pub struct InputOptions {
    /// 入力の区切り文字（1文字。タブは `\t` または `tab`）[既定: タブ]
    #[arg(long, value_parser = parsers::parse_separator, help_heading = "入力")]
    pub separator: Option<char>,

    /// 常に読み飛ばす行番号（1始まり、カンマ区切り）[既定: 1,2,3,5]
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parsers::parse_line_number,
        help_heading = "入力"
    )]
    pub exclude_lines: Option<Vec<usize>>,

    /// ヘッダー行の行番号（1始まり。この行はデータとしては出力されない）[既定: 4]
    #[arg(long, value_parser = parsers::parse_line_number, help_heading = "入力")]
    pub header_line: Option<usize>,

    /// 入力ファイルの文字コード（WHATWG ラベル: utf-8, shift_jis, euc-jp など）[既定: utf-8]
    #[arg(long, help_heading = "入力")]
    pub encoding: Option<String>,

    /// 対象とする拡張子（大文字小文字を区別しない）[既定: txt]
    #[arg(long, help_heading = "入力")]
    pub extension: Option<String>,
}

/// Output-related options
#[derive(ClapArgs, Debug, Default)]
pub struct OutputOptions {
    /// CSV の改行コード [既定: lf]
    #[arg(long, value_enum, help_heading = "出力")]
    pub line_ending: Option<CliLineEnding>,

    /// 実行結果レポートの形式（標準出力）
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: ReportFormat,
}

/// Behavior options
#[derive(ClapArgs, Debug, Default)]
pub struct BehaviorOptions {
    /// 設定ファイル（.yaml / .yml / .json）。コマンドライン引数が優先される
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "動作")]
    pub config: Option<PathBuf>,

    /// スキップまたは失敗したファイルがあれば終了コード 1 を返す（処理自体は最後まで続行）
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ログを詳細に出力（-v: debug, -vv: trace）
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "動作")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, help_heading = "動作")]
    pub quiet: bool,
}

impl Args {
    /// Default log filter derived from `-v` / `-q`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.behavior.quiet {
            return "error";
        }
        match self.behavior.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
