//! # ユースケース層
//!
//! ハンドラから呼び出されるアプリケーションロジックを定義する。

pub mod endereco;

pub use endereco::EnderecoUseCaseImpl;
