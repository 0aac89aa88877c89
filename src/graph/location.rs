//! Source Location Annotations
//!
//! グラフノードに付与するソースコード位置情報を定義する。
//! 位置情報は lowering の最終ステップで各ノードに 1 回だけ付与される。

use serde::{Deserialize, Serialize};

/// ソースコード位置情報（グラフノードへの注釈）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    /// 開始行番号 (1-indexed)
    pub line: usize,
    /// 開始列番号 (1-indexed)
    pub column: usize,
    /// 終了行番号
    pub end_line: usize,
    /// 終了列番号
    pub end_column: usize,
    /// ファイル名（任意）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl SourceLocation {
    /// 新しい SourceLocation を作成
    pub fn new(line: usize, column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            line,
            column,
            end_line,
            end_column,
            file: None,
        }
    }

    /// ファイル名付きの SourceLocation を作成
    pub fn with_file(mut self, file: String) -> Self {
        self.file = Some(file);
        self
    }

    /// 位置が不明な場合の SourceLocation
    pub fn unknown() -> Self {
        Self::default()
    }

    /// 位置情報があるかどうか
    pub fn is_known(&self) -> bool {
        self.line > 0
    }

    /// 2 つの位置情報をまとめた区間を返す（key/value ペア用）
    ///
    /// `self` の開始位置から `other` の終了位置までをカバーする。
    pub fn covering(&self, other: &SourceLocation) -> SourceLocation {
        SourceLocation {
            line: self.line,
            column: self.column,
            end_line: other.end_line,
            end_column: other.end_column,
            file: self.file.clone(),
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_known() {
            return Ok(());
        }

        if let Some(ref file) = self.file {
            write!(f, "[{}:{}:{}]", file, self.line, self.column)
        } else {
            write!(f, "[{}:{}]", self.line, self.column)
        }
    }
}
