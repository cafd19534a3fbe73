//! # 住所（Endereco）
//!
//! 郵便住所レコードを表現するドメインモデル。
//!
//! ## 属性
//!
//! | 属性 | 型 | 制約（DB カラム） |
//! |------|----|------------------|
//! | `id` | `EnderecoId` | 永続化層が採番、以後不変 |
//! | `rua` | 文字列 | 必須、100 文字以内 |
//! | `numero` | 整数 | 必須 |
//! | `complemento` | 文字列 | 任意、30 文字以内 |
//! | `cidade` | 文字列 | 必須、50 文字以内 |
//! | `estado` | 文字列 | 必須、2 文字以内（州コード） |
//! | `cep` | 文字列 | 必須、8 文字以内 |
//!
//! ## 必須項目を `Option` で保持する理由
//!
//! 入力ペイロードに含まれる `null` はそのまま永続化層まで届き、
//! DB の NOT NULL 制約で拒否される。ドメイン層では入力検証を行わない。
//!
//! ## 使用例
//!
//! ```rust
//! use enderecos_domain::endereco::{Endereco, EnderecoDados, EnderecoId};
//!
//! let mut salvo = Endereco::from_db(
//!     EnderecoId::from_i64(1),
//!     EnderecoDados {
//!         rua: Some("Rua A".to_string()),
//!         numero: Some(123),
//!         complemento: None,
//!         cidade: Some("Osasco".to_string()),
//!         estado: Some("SP".to_string()),
//!         cep: Some("06053020".to_string()),
//!     },
//! );
//!
//! let novo = Endereco::new(EnderecoDados {
//!     rua: Some("Rua B".to_string()),
//!     ..salvo.dados().clone()
//! });
//! salvo.copy_fields_from(&novo);
//!
//! assert_eq!(salvo.id(), Some(EnderecoId::from_i64(1)));
//! assert_eq!(salvo.rua(), Some("Rua B"));
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// エラーメッセージ等で使うエンティティ名
pub const ENTITY_TYPE: &str = "endereço";

/// `rua` カラムの最大文字数（DB: `VARCHAR(100)`）
pub const RUA_MAX_LENGTH: usize = 100;

/// `complemento` カラムの最大文字数（DB: `VARCHAR(30)`）
pub const COMPLEMENTO_MAX_LENGTH: usize = 30;

/// `cidade` カラムの最大文字数（DB: `VARCHAR(50)`）
pub const CIDADE_MAX_LENGTH: usize = 50;

/// `estado` カラムの最大文字数（DB: `VARCHAR(2)`）
pub const ESTADO_MAX_LENGTH: usize = 2;

/// `cep` カラムの最大文字数（DB: `VARCHAR(8)`）
pub const CEP_MAX_LENGTH: usize = 8;

/// 住所の一意識別子
///
/// DB の IDENTITY カラムで採番される整数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[display("{_0}")]
pub struct EnderecoId(i64);

impl EnderecoId {
    /// 既存の整数値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 住所の更新可能な項目
///
/// `id` 以外のすべての項目。作成時の入力と更新時のコピー元の両方に使う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnderecoDados {
    pub rua:         Option<String>,
    pub numero:      Option<i32>,
    pub complemento: Option<String>,
    pub cidade:      Option<String>,
    pub estado:      Option<String>,
    pub cep:         Option<String>,
}

/// 住所エンティティ
///
/// # 不変条件
///
/// - `id` は永続化層での初回保存時に一度だけ採番され、以後変わらない
/// - `copy_fields_from` は `id` を書き換えない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endereco {
    id:    Option<EnderecoId>,
    dados: EnderecoDados,
}

impl Endereco {
    /// 未保存の住所を作成する（`id` は未採番）
    pub fn new(dados: EnderecoDados) -> Self {
        Self { id: None, dados }
    }

    /// データベースから住所を復元する
    pub fn from_db(id: EnderecoId, dados: EnderecoDados) -> Self {
        Self {
            id: Some(id),
            dados,
        }
    }

    /// `source` の更新可能な項目をすべて自身にコピーする
    ///
    /// 部分更新ではなく全項目の上書き。`source` 側が `None` の項目も
    /// `None` で上書きする。`id` はコピーしない。
    pub fn copy_fields_from(&mut self, source: &Endereco) {
        self.dados.rua = source.dados.rua.clone();
        self.dados.numero = source.dados.numero;
        self.dados.complemento = source.dados.complemento.clone();
        self.dados.cidade = source.dados.cidade.clone();
        self.dados.estado = source.dados.estado.clone();
        self.dados.cep = source.dados.cep.clone();
    }

    // Getter メソッド

    pub fn id(&self) -> Option<EnderecoId> {
        self.id
    }

    pub fn dados(&self) -> &EnderecoDados {
        &self.dados
    }

    pub fn into_dados(self) -> EnderecoDados {
        self.dados
    }

    pub fn rua(&self) -> Option<&str> {
        self.dados.rua.as_deref()
    }

    pub fn numero(&self) -> Option<i32> {
        self.dados.numero
    }

    pub fn complemento(&self) -> Option<&str> {
        self.dados.complemento.as_deref()
    }

    pub fn cidade(&self) -> Option<&str> {
        self.dados.cidade.as_deref()
    }

    pub fn estado(&self) -> Option<&str> {
        self.dados.estado.as_deref()
    }

    pub fn cep(&self) -> Option<&str> {
        self.dados.cep.as_deref()
    }
}
