//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、処理はユースケース層に委譲

pub mod endereco;
pub mod health;

pub use endereco::{
    EnderecoDto,
    EnderecoState,
    delete_endereco,
    get_endereco,
    list_enderecos,
    store_endereco,
    update_endereco,
};
pub use health::{ReadinessState, health_check, readiness_check};
