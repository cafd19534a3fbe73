//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use enderecos_domain::endereco::EnderecoDados;

/// Osasco の住所データ
pub fn dados_osasco() -> EnderecoDados {
    EnderecoDados {
        rua:         Some("Rua A".to_string()),
        numero:      Some(123),
        complemento: Some("Apto 1".to_string()),
        cidade:      Some("Osasco".to_string()),
        estado:      Some("SP".to_string()),
        cep:         Some("06053020".to_string()),
    }
}

/// Campinas の住所データ（complemento なし）
pub fn dados_campinas() -> EnderecoDados {
    EnderecoDados {
        rua:         Some("Avenida Brasil".to_string()),
        numero:      Some(900),
        complemento: None,
        cidade:      Some("Campinas".to_string()),
        estado:      Some("SP".to_string()),
        cep:         Some("13010000".to_string()),
    }
}
