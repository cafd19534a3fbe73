//! # リポジトリ実装
//!
//! 住所レコードの永続化インターフェースとその PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイト経由でのみ永続化層に触れる
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod endereco_repository;

pub use endereco_repository::{EnderecoRepository, PostgresEnderecoRepository};
