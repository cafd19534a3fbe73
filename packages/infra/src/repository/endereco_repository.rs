//! # EnderecoRepository
//!
//! 住所レコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **汎用 CRUD**: 保存・ID 検索・全件取得・ID 削除のみを提供する
//! - **マージ保存**: `save` は ID 未採番なら挿入、採番済みなら更新。
//!   更新対象の行が存在しない場合は新しい ID で挿入する
//! - **入力検証なし**: 必須項目の欠落や文字数超過は DB 制約で拒否され、
//!   [`InfraErrorKind::ConstraintViolation`](crate::error::InfraErrorKind::ConstraintViolation)
//!   として返る

use async_trait::async_trait;
use enderecos_domain::endereco::{Endereco, EnderecoDados, EnderecoId};
use sqlx::PgPool;

use crate::error::InfraError;

/// 住所リポジトリトレイト
#[async_trait]
pub trait EnderecoRepository: Send + Sync {
    /// 住所を保存する
    ///
    /// - `id` が未採番: 新しい ID を採番して挿入する
    /// - `id` が採番済み: 該当行を全項目上書きする。行が存在しなければ新しい ID で挿入する
    ///
    /// 保存後の状態（採番済み ID を含む）を返す。
    async fn save(&self, endereco: &Endereco) -> Result<Endereco, InfraError>;

    /// ID で住所を検索する
    ///
    /// 存在しない場合は `Ok(None)`。
    async fn find_by_id(&self, id: EnderecoId) -> Result<Option<Endereco>, InfraError>;

    /// 存在を前提として ID で住所を取得する
    ///
    /// 存在しない場合は [`InfraErrorKind::RowNotFound`](crate::error::InfraErrorKind::RowNotFound)
    /// を返す。ドメインの NotFound には変換しない。
    async fn get_by_id(&self, id: EnderecoId) -> Result<Endereco, InfraError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| InfraError::row_not_found("Endereco", id.to_string()))
    }

    /// 全住所を ID 昇順で取得する
    async fn find_all(&self) -> Result<Vec<Endereco>, InfraError>;

    /// ID で住所を削除する
    ///
    /// 該当行が存在しない場合も成功として扱う。
    async fn delete_by_id(&self, id: EnderecoId) -> Result<(), InfraError>;
}

/// DB の endereco テーブルの行を表す中間構造体
#[derive(sqlx::FromRow)]
struct EnderecoRow {
    id:          i64,
    rua:         Option<String>,
    numero:      Option<i32>,
    complemento: Option<String>,
    cidade:      Option<String>,
    estado:      Option<String>,
    cep:         Option<String>,
}

impl From<EnderecoRow> for Endereco {
    fn from(row: EnderecoRow) -> Self {
        Endereco::from_db(
            EnderecoId::from_i64(row.id),
            EnderecoDados {
                rua:         row.rua,
                numero:      row.numero,
                complemento: row.complemento,
                cidade:      row.cidade,
                estado:      row.estado,
                cep:         row.cep,
            },
        )
    }
}

/// PostgreSQL 実装の EnderecoRepository
#[derive(Debug, Clone)]
pub struct PostgresEnderecoRepository {
    pool: PgPool,
}

impl PostgresEnderecoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, dados: &EnderecoDados) -> Result<Endereco, InfraError> {
        let row = sqlx::query_as::<_, EnderecoRow>(
            r#"
            INSERT INTO endereco (rua, numero, complemento, cidade, estado, cep)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, rua, numero, complemento, cidade, estado, cep
            "#,
        )
        .bind(dados.rua.as_deref())
        .bind(dados.numero)
        .bind(dados.complemento.as_deref())
        .bind(dados.cidade.as_deref())
        .bind(dados.estado.as_deref())
        .bind(dados.cep.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: EnderecoId,
        dados: &EnderecoDados,
    ) -> Result<Option<Endereco>, InfraError> {
        let row = sqlx::query_as::<_, EnderecoRow>(
            r#"
            UPDATE endereco
            SET rua = $2, numero = $3, complemento = $4, cidade = $5, estado = $6, cep = $7
            WHERE id = $1
            RETURNING id, rua, numero, complemento, cidade, estado, cep
            "#,
        )
        .bind(id.as_i64())
        .bind(dados.rua.as_deref())
        .bind(dados.numero)
        .bind(dados.complemento.as_deref())
        .bind(dados.cidade.as_deref())
        .bind(dados.estado.as_deref())
        .bind(dados.cep.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Endereco::from))
    }
}

#[async_trait]
impl EnderecoRepository for PostgresEnderecoRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(id = ?endereco.id()))]
    async fn save(&self, endereco: &Endereco) -> Result<Endereco, InfraError> {
        let Some(id) = endereco.id() else {
            return self.insert(endereco.dados()).await;
        };

        match self.update(id, endereco.dados()).await? {
            Some(updated) => Ok(updated),
            None => {
                tracing::debug!(%id, "更新対象の行が存在しないため新規に挿入する");
                self.insert(endereco.dados()).await
            }
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: EnderecoId) -> Result<Option<Endereco>, InfraError> {
        let row = sqlx::query_as::<_, EnderecoRow>(
            r#"
            SELECT id, rua, numero, complemento, cidade, estado, cep
            FROM endereco
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Endereco::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Endereco>, InfraError> {
        let rows = sqlx::query_as::<_, EnderecoRow>(
            r#"
            SELECT id, rua, numero, complemento, cidade, estado, cep
            FROM endereco
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Endereco::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete_by_id(&self, id: EnderecoId) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            DELETE FROM endereco
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
