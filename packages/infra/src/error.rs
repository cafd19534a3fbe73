//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターン:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, ConstraintViolation 等）
//!
//! ## 制約違反の識別
//!
//! `From<sqlx::Error>` は PostgreSQL の SQLSTATE を見て、カラム制約の違反を
//! [`InfraErrorKind::ConstraintViolation`] に振り分ける。
//!
//! | SQLSTATE | 意味 |
//! |----------|------|
//! | `23502` | NOT NULL 制約違反 |
//! | `22001` | 文字列長超過 |
//! | `23514` | CHECK 制約違反 |

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// NOT NULL 制約違反
const SQLSTATE_NOT_NULL_VIOLATION: &str = "23502";
/// 文字列長超過（VARCHAR(n) への長すぎる値）
const SQLSTATE_STRING_DATA_RIGHT_TRUNCATION: &str = "22001";
/// CHECK 制約違反
const SQLSTATE_CHECK_VIOLATION: &str = "23514";

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// `From<sqlx::Error>` や convenience constructor でエラーを生成すると、
/// その時点のスパン情報が自動的にキャプチャされる。
///
/// ## パターンマッチ
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::ConstraintViolation { column, .. } => { /* 400 */ }
///     _ => { /* 500 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラーなど。制約違反以外のすべて。
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// カラム制約違反
    ///
    /// 必須項目の欠落、文字数上限の超過など。原因はクライアント入力にある。
    #[error("制約違反: {message}")]
    ConstraintViolation {
        /// 違反したカラム名（特定できない場合は `None`）
        column:  Option<String>,
        /// 違反内容
        message: String,
    },

    /// 存在前提の検索で行が見つからない
    ///
    /// [`EnderecoRepository::get_by_id`](crate::repository::EnderecoRepository::get_by_id)
    /// のように「必ず存在する」ことを前提とする検索で使用する。
    #[error("行が見つかりません: {entity}(id={id})")]
    RowNotFound {
        /// エンティティ名（例: "Endereco"）
        entity: String,
        /// 検索に使用した ID
        id:     String,
    },
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 制約違反の場合、違反内容のメッセージを返す
    pub fn as_constraint_violation(&self) -> Option<&str> {
        match &self.kind {
            InfraErrorKind::ConstraintViolation { message, .. } => Some(message),
            _ => None,
        }
    }

    // ===== Convenience constructors =====

    /// 制約違反エラーを生成する
    pub fn constraint_violation(column: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::ConstraintViolation {
                column:  column.map(str::to_string),
                message: message.into(),
            },
            span_trace: SpanTrace::capture(),
        }
    }

    /// 行が見つからないエラーを生成する
    pub fn row_not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::RowNotFound {
                entity: entity.into(),
                id:     id.into(),
            },
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        let violation = match &source {
            sqlx::Error::Database(db_err) if is_constraint_violation(db_err.code().as_deref()) => {
                let column = db_err
                    .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
                    .and_then(|pg| pg.column())
                    .map(str::to_string);
                Some((column, db_err.message().to_string()))
            }
            _ => None,
        };

        let kind = match violation {
            Some((column, message)) => InfraErrorKind::ConstraintViolation { column, message },
            None => InfraErrorKind::Database(source),
        };

        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }
}

fn is_constraint_violation(code: Option<&str>) -> bool {
    matches!(
        code,
        Some(
            SQLSTATE_NOT_NULL_VIOLATION
                | SQLSTATE_STRING_DATA_RIGHT_TRUNCATION
                | SQLSTATE_CHECK_VIOLATION
        )
    )
}
