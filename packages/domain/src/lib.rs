//! # Enderecos ドメイン層
//!
//! 住所（Endereco）レコードのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 住所レコード [`endereco::Endereco`]（単一テーブル、他エンティティとの関連なし）
//! - **値オブジェクト**: 識別子 [`endereco::EnderecoId`]
//! - **ドメインエラー**: 検索失敗・空一覧を表現する [`DomainError`]
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use enderecos_domain::{
//!     DomainError,
//!     endereco::{ENTITY_TYPE, EnderecoId},
//! };
//!
//! let error = DomainError::NotFound {
//!     entity_type: ENTITY_TYPE,
//!     id:          EnderecoId::from_i64(42).to_string(),
//! };
//! assert_eq!(error.to_string(), "Não foi possível encontrar endereço!");
//! ```

pub mod endereco;
pub mod error;

pub use error::DomainError;
