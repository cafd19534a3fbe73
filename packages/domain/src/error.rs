//! # ドメイン層エラー定義
//!
//! ドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `NotFound` | 404 Not Found | ID で検索したエンティティが存在しない |
//! | `EmptyCollection` | 404 Not Found | 一覧取得の結果が 0 件 |
//!
//! 一覧が空であることは正常な空配列ではなく例外状態として扱う。
//!
//! `Display` の文言はそのまま API レスポンスの `detail` に使われるため、
//! 利用者向けの文言（ポルトガル語）で定義する。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// エンティティが見つからない
    ///
    /// # フィールド
    ///
    /// - `entity_type`: エンティティの種類（コンパイル時に決定される `&'static str`）
    /// - `id`: 検索に使用した識別子
    #[error("Não foi possível encontrar {entity_type}!")]
    NotFound {
        /// エンティティの種類（"endereço" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },

    /// 一覧取得の結果が空
    #[error("Lista de {entity_type} vazia")]
    EmptyCollection {
        /// エンティティの種類
        entity_type: &'static str,
    },
}
