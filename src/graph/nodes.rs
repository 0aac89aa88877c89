use super::location::SourceLocation;
use super::ops::OperatorCode;
use super::types::TypeTag;
use crate::ast::Constant;
use serde::{Deserialize, Serialize};

/// グラフノード
///
/// Lowering の出力単位。`kind` が構造、`code` が元ソースの断片、
/// `location` が位置注釈を保持する。子ノードの所有は排他的で、
/// 1 つの子は必ず 1 つの親にのみ属する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub kind: NodeKind,
    /// 元ソースコードの断片
    #[serde(default)]
    pub code: String,
    /// 位置注釈（lowering の最終ステップで付与）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

/// グラフノード種別
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NodeKind {
    /// 対応できない式形の第一級プレースホルダ
    ///
    /// 下流はこの variant で縮退ノードを構造的に検出できる。
    /// 番兵値やダミー文字列は使わない。
    Unsupported,

    /// 束縛シンボルを表す宣言ノード
    ///
    /// 式 lowering は宣言を生成しないが、文レベルの lowering が
    /// 生成したものを属性アクセスの base として受け取ることがある。
    Declaration { name: String, ty: TypeTag },

    /// 二項演算子
    ///
    /// 通常は lhs/rhs とも必ず存在する（post-order で構築）。
    /// 例外は縮退パスの `Dummy` コードのみで、その場合は両方 None。
    BinaryOperator {
        op: OperatorCode,
        lhs: Option<Box<GraphNode>>,
        rhs: Option<Box<GraphNode>>,
    },

    /// 単項演算子
    UnaryOperator {
        op: OperatorCode,
        operand: Box<GraphNode>,
    },

    /// 条件式 (`body if test else orelse`)
    ConditionalExpression {
        condition: Box<GraphNode>,
        then_expr: Box<GraphNode>,
        else_expr: Box<GraphNode>,
        ty: TypeTag,
    },

    /// 初期化子リスト（list / tuple / dict の共通表現）
    InitializerListExpression { initializers: Vec<GraphNode> },

    /// dict エントリの key/value ペア
    ///
    /// key が None の場合は `{**other}` のような unpack プレースホルダ。
    KeyValueExpression {
        key: Option<Box<GraphNode>>,
        value: Option<Box<GraphNode>>,
    },

    /// 関数呼び出し
    CallExpression {
        callee: Box<GraphNode>,
        name: String,
        arguments: Vec<Argument>,
    },

    /// メソッド呼び出し (`obj.method(...)`)
    MemberCallExpression {
        name: String,
        /// 完全修飾名 (`base.member`)
        fqn: String,
        base: Box<GraphNode>,
        member: Box<GraphNode>,
        operator: String,
        arguments: Vec<Argument>,
    },

    /// コンストラクタ呼び出し（シンボルテーブルで解決された record）
    ConstructExpression {
        name: String,
        ty: TypeTag,
        arguments: Vec<Argument>,
    },

    /// 型キャスト (`str(x)`)
    CastExpression {
        cast_type: TypeTag,
        expression: Box<GraphNode>,
    },

    /// 名前参照
    DeclaredReferenceExpression { name: String, ty: TypeTag },

    /// 属性アクセス (`obj.attr`)
    MemberExpression {
        base: Box<GraphNode>,
        name: String,
        operator: String,
        ty: TypeTag,
    },

    /// 添字アクセス (`obj[idx]`)
    ArraySubscriptionExpression {
        array: Box<GraphNode>,
        subscript: Box<GraphNode>,
    },

    /// リテラル
    Literal {
        value: Constant,
        ty: TypeTag,
        /// 値の文字列形 (`str(value)`)
        name: String,
    },
}

/// 呼び出し引数
///
/// `name` が Some なら keyword 引数。ソース上の出現順を保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub value: GraphNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Argument {
    pub fn positional(value: GraphNode) -> Self {
        Self { value, name: None }
    }

    pub fn keyword(name: String, value: GraphNode) -> Self {
        Self {
            value,
            name: Some(name),
        }
    }
}

impl GraphNode {
    /// 注釈なしのノードを作成（code/location は後段で付与）
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            code: String::new(),
            location: None,
        }
    }

    /// code と位置注釈を付与する（消費型ビルダー）
    ///
    /// 通常は 1 ノードにつき 1 回だけ適用される。唯一の例外は
    /// await の lowering で、内側ノードが await 式の区間で再注釈される。
    pub fn at(mut self, code: String, location: SourceLocation) -> Self {
        self.code = code;
        self.location = Some(location);
        self
    }

    /// code のみを付与する（位置情報を持たないノード用）
    pub fn with_code(mut self, code: String) -> Self {
        self.code = code;
        self
    }

    /// ノードが持つ名前を返す（持たない種別は空文字列）
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Declaration { name, .. }
            | NodeKind::CallExpression { name, .. }
            | NodeKind::MemberCallExpression { name, .. }
            | NodeKind::ConstructExpression { name, .. }
            | NodeKind::DeclaredReferenceExpression { name, .. }
            | NodeKind::MemberExpression { name, .. }
            | NodeKind::Literal { name, .. } => name,
            _ => "",
        }
    }

    /// 属性アクセス結果 (MemberExpression) かどうか
    pub fn is_member_expression(&self) -> bool {
        matches!(self.kind, NodeKind::MemberExpression { .. })
    }

    /// 宣言ノードかどうか
    pub fn is_declaration(&self) -> bool {
        matches!(self.kind, NodeKind::Declaration { .. })
    }

    /// 縮退プレースホルダかどうか
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, NodeKind::Unsupported)
    }

    /// 宣言ノードを、その名前・型・code を引き継いだ名前参照に包む
    ///
    /// 宣言以外のノードはそのまま返す。
    pub fn into_declared_reference(self) -> GraphNode {
        match self.kind {
            NodeKind::Declaration { name, ty } => GraphNode {
                kind: NodeKind::DeclaredReferenceExpression { name, ty },
                code: self.code,
                location: self.location,
            },
            _ => self,
        }
    }
}
