//! Graph module
//!
//! 出力となるグラフ表現（正規化された静的型付きプログラム表現）の定義。
//!
//! ## サブモジュール
//! - `ops` - 演算子コード定義 (OperatorCode)
//! - `nodes` - グラフノード定義 (GraphNode, NodeKind, Argument)
//! - `types` - 静的型タグ定義 (TypeTag)
//! - `location` - ソースコード位置注釈 (SourceLocation)

pub mod location;
pub mod nodes;
pub mod ops;
pub mod types;

// 演算子コードをre-export
pub use ops::*;
// ノードをre-export
pub use nodes::*;
// 型タグをre-export
pub use types::*;
// 位置注釈をre-export
pub use location::*;
