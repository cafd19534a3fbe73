//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! enderecos-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! `endereco` テーブルと同じ NOT NULL・文字数制約を検査し、違反時は
//! [`InfraErrorKind::ConstraintViolation`](crate::error::InfraErrorKind::ConstraintViolation)
//! を返す。

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use enderecos_domain::endereco::{
    CEP_MAX_LENGTH,
    CIDADE_MAX_LENGTH,
    COMPLEMENTO_MAX_LENGTH,
    ESTADO_MAX_LENGTH,
    Endereco,
    EnderecoDados,
    EnderecoId,
    RUA_MAX_LENGTH,
};

use crate::{error::InfraError, repository::EnderecoRepository};

// ===== MockEnderecoRepository =====

#[derive(Default)]
struct MockStore {
    rows:    BTreeMap<i64, Endereco>,
    last_id: i64,
}

#[derive(Clone, Default)]
pub struct MockEnderecoRepository {
    store: Arc<Mutex<MockStore>>,
}

impl MockEnderecoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存されている件数を返す
    pub fn len(&self) -> usize {
        self.store.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_required<T>(column: &str, value: Option<&T>) -> Result<(), InfraError>
where
    T: ?Sized,
{
    match value {
        Some(_) => Ok(()),
        None => Err(InfraError::constraint_violation(
            Some(column),
            format!("null value in column \"{column}\" violates not-null constraint"),
        )),
    }
}

fn check_length(column: &str, value: Option<&str>, max: usize) -> Result<(), InfraError> {
    match value {
        Some(v) if v.chars().count() > max => Err(InfraError::constraint_violation(
            Some(column),
            format!("value too long for type character varying({max})"),
        )),
        _ => Ok(()),
    }
}

fn check_constraints(dados: &EnderecoDados) -> Result<(), InfraError> {
    check_required("rua", dados.rua.as_deref())?;
    check_required("numero", dados.numero.as_ref())?;
    check_required("cidade", dados.cidade.as_deref())?;
    check_required("estado", dados.estado.as_deref())?;
    check_required("cep", dados.cep.as_deref())?;

    check_length("rua", dados.rua.as_deref(), RUA_MAX_LENGTH)?;
    check_length(
        "complemento",
        dados.complemento.as_deref(),
        COMPLEMENTO_MAX_LENGTH,
    )?;
    check_length("cidade", dados.cidade.as_deref(), CIDADE_MAX_LENGTH)?;
    check_length("estado", dados.estado.as_deref(), ESTADO_MAX_LENGTH)?;
    check_length("cep", dados.cep.as_deref(), CEP_MAX_LENGTH)
}

#[async_trait]
impl EnderecoRepository for MockEnderecoRepository {
    async fn save(&self, endereco: &Endereco) -> Result<Endereco, InfraError> {
        check_constraints(endereco.dados())?;

        let mut store = self.store.lock().unwrap();
        let id = match endereco.id() {
            Some(id) if store.rows.contains_key(&id.as_i64()) => id,
            _ => {
                store.last_id += 1;
                EnderecoId::from_i64(store.last_id)
            }
        };

        let saved = Endereco::from_db(id, endereco.dados().clone());
        store.rows.insert(id.as_i64(), saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: EnderecoId) -> Result<Option<Endereco>, InfraError> {
        Ok(self.store.lock().unwrap().rows.get(&id.as_i64()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Endereco>, InfraError> {
        Ok(self.store.lock().unwrap().rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: EnderecoId) -> Result<(), InfraError> {
        self.store.lock().unwrap().rows.remove(&id.as_i64());
        Ok(())
    }
}
