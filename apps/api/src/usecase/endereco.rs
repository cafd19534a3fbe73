//! 住所管理ユースケース

use std::sync::Arc;

use enderecos_domain::{
    DomainError,
    endereco::{ENTITY_TYPE, Endereco, EnderecoId},
};
use enderecos_infra::repository::EnderecoRepository;

use crate::error::CoreError;

/// 保存成功時のメッセージ
pub const MSG_ARMAZENADO: &str = "Endereço armazenado com sucesso";
/// 更新成功時のメッセージ
pub const MSG_ATUALIZADO: &str = "Endereço atualizado com sucesso!";
/// 削除成功時のメッセージ
pub const MSG_DELETADO: &str = "Cadastro deletado com sucesso!";

/// 住所管理ユースケース
pub struct EnderecoUseCaseImpl {
    endereco_repository: Arc<dyn EnderecoRepository>,
}

impl EnderecoUseCaseImpl {
    pub fn new(endereco_repository: Arc<dyn EnderecoRepository>) -> Self {
        Self {
            endereco_repository,
        }
    }

    /// 住所を新規保存する
    pub async fn store(&self, endereco: Endereco) -> Result<&'static str, CoreError> {
        let saved = self.endereco_repository.save(&endereco).await?;
        tracing::info!(id = ?saved.id(), "住所を保存しました");
        Ok(MSG_ARMAZENADO)
    }

    /// ID で住所を取得する
    ///
    /// 存在しない場合は NotFound。
    pub async fn find_by_id(&self, id: EnderecoId) -> Result<Endereco, CoreError> {
        let endereco = self
            .endereco_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: ENTITY_TYPE,
                id:          id.to_string(),
            })?;
        Ok(endereco)
    }

    /// 全住所を取得する
    ///
    /// 1 件もない場合は EmptyCollection。
    pub async fn list_all(&self) -> Result<Vec<Endereco>, CoreError> {
        let enderecos = self.endereco_repository.find_all().await?;
        if enderecos.is_empty() {
            return Err(DomainError::EmptyCollection {
                entity_type: ENTITY_TYPE,
            }
            .into());
        }
        Ok(enderecos)
    }

    /// 既存の住所を `payload` の内容で上書きする
    ///
    /// 既存レコードの取得は存在前提の `get_by_id` で行うため、
    /// ID が存在しない場合は NotFound ではなく Database エラーになる。
    pub async fn update(&self, payload: Endereco, id: EnderecoId) -> Result<&'static str, CoreError> {
        let mut existing = self.endereco_repository.get_by_id(id).await?;
        existing.copy_fields_from(&payload);
        self.endereco_repository.save(&existing).await?;
        tracing::info!(%id, "住所を更新しました");
        Ok(MSG_ATUALIZADO)
    }

    /// ID で住所を削除する
    ///
    /// 存在確認は行わない。存在しない ID でも成功メッセージを返す。
    pub async fn delete_by_id(&self, id: EnderecoId) -> Result<&'static str, CoreError> {
        self.endereco_repository.delete_by_id(id).await?;
        tracing::info!(%id, "住所を削除しました");
        Ok(MSG_DELETADO)
    }
}
