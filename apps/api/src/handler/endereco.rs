//! # 住所ハンドラ
//!
//! 住所レコードの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /endereco/todos` - 全住所の一覧
//! - `POST /endereco/salvar` - 住所の新規保存
//! - `GET /endereco/{id}` - 住所の取得
//! - `PATCH /endereco/atualizar/{id}` - 住所の全項目上書き
//! - `DELETE /endereco/deletar/{id}` - 住所の削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use enderecos_domain::endereco::{Endereco, EnderecoDados, EnderecoId};
use serde::{Deserialize, Serialize};

use crate::{error::CoreError, usecase::EnderecoUseCaseImpl};

/// 住所 API の共有状態
pub struct EnderecoState {
    pub usecase: EnderecoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 住所 DTO
///
/// リクエストとレスポンスの両方に使う。キーが欠けている項目は `null` として扱う。
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnderecoDto {
    pub id:          Option<i64>,
    pub rua:         Option<String>,
    pub numero:      Option<i32>,
    pub complemento: Option<String>,
    pub cidade:      Option<String>,
    pub estado:      Option<String>,
    pub cep:         Option<String>,
}

impl EnderecoDto {
    /// 未保存の住所に変換する（`id` は無視する）
    fn into_endereco(self) -> Endereco {
        Endereco::new(EnderecoDados {
            rua:         self.rua,
            numero:      self.numero,
            complemento: self.complemento,
            cidade:      self.cidade,
            estado:      self.estado,
            cep:         self.cep,
        })
    }
}

impl From<Endereco> for EnderecoDto {
    fn from(endereco: Endereco) -> Self {
        let id = endereco.id().map(|id| id.as_i64());
        let dados = endereco.into_dados();
        Self {
            id,
            rua: dados.rua,
            numero: dados.numero,
            complemento: dados.complemento,
            cidade: dados.cidade,
            estado: dados.estado,
            cep: dados.cep,
        }
    }
}

// --- ハンドラ ---

/// GET /endereco/todos
///
/// 全住所を ID 順で返す。1 件もない場合は 404。
#[tracing::instrument(skip_all)]
pub async fn list_enderecos(
    State(state): State<Arc<EnderecoState>>,
) -> Result<impl IntoResponse, CoreError> {
    let enderecos = state.usecase.list_all().await?;

    let items: Vec<EnderecoDto> = enderecos.into_iter().map(EnderecoDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /endereco/salvar
///
/// 住所を新規保存する。ペイロードの `id` は無視する。
///
/// ## レスポンス
///
/// - `201 Created`: 保存成功メッセージ（text/plain）
/// - `400 Bad Request`: 必須項目の欠落、文字数超過
#[tracing::instrument(skip_all)]
pub async fn store_endereco(
    State(state): State<Arc<EnderecoState>>,
    Json(req): Json<EnderecoDto>,
) -> Result<impl IntoResponse, CoreError> {
    let message = state.usecase.store(req.into_endereco()).await?;

    Ok((StatusCode::CREATED, message))
}

/// GET /endereco/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 住所
/// - `404 Not Found`: 住所が見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_endereco(
    State(state): State<Arc<EnderecoState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
    let endereco = state.usecase.find_by_id(EnderecoId::from_i64(id)).await?;

    Ok((StatusCode::OK, Json(EnderecoDto::from(endereco))))
}

/// PATCH /endereco/atualizar/{id}
///
/// 既存の住所をペイロードの内容で全項目上書きする。
///
/// ## レスポンス
///
/// - `201 Created`: 更新成功メッセージ（text/plain）
/// - `400 Bad Request`: 必須項目の欠落、文字数超過
/// - `500 Internal Server Error`: 住所が見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_endereco(
    State(state): State<Arc<EnderecoState>>,
    Path(id): Path<i64>,
    Json(req): Json<EnderecoDto>,
) -> Result<impl IntoResponse, CoreError> {
    let message = state
        .usecase
        .update(req.into_endereco(), EnderecoId::from_i64(id))
        .await?;

    Ok((StatusCode::CREATED, message))
}

/// DELETE /endereco/deletar/{id}
///
/// 存在しない ID でも 200 を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_endereco(
    State(state): State<Arc<EnderecoState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
    let message = state
        .usecase
        .delete_by_id(EnderecoId::from_i64(id))
        .await?;

    Ok((StatusCode::OK, message))
}
