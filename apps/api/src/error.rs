//! # API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンス（RFC 9457 Problem Details）への変換を定義する。
//!
//! | エラー | HTTP ステータス | `type` |
//! |--------|----------------|--------|
//! | `NotFound` | 404 | `not-found` |
//! | `EmptyCollection` | 404 | `empty-collection` |
//! | `ConstraintViolation` | 400 | `validation-error` |
//! | `Database` | 500 | `internal-error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use enderecos_domain::DomainError;
use enderecos_infra::InfraError;
use enderecos_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 一覧が空
    #[error("一覧が空です: {0}")]
    EmptyCollection(String),

    /// カラム制約違反（必須項目の欠落、文字数超過）
    #[error("制約違反: {0}")]
    ConstraintViolation(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(InfraError),
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { .. } => CoreError::NotFound(err.to_string()),
            DomainError::EmptyCollection { .. } => CoreError::EmptyCollection(err.to_string()),
        }
    }
}

impl From<InfraError> for CoreError {
    fn from(err: InfraError) -> Self {
        if let Some(message) = err.as_constraint_violation() {
            return CoreError::ConstraintViolation(message.to_string());
        }
        CoreError::Database(err)
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let body = match &self {
            CoreError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            CoreError::EmptyCollection(msg) => ErrorResponse::empty_collection(msg.clone()),
            CoreError::ConstraintViolation(msg) => ErrorResponse::validation_error(msg.clone()),
            CoreError::Database(e) => {
                tracing::error!(
                    error.category = "infrastructure",
                    error.kind = "database",
                    "データベースエラー: {}\n{}",
                    e,
                    e.span_trace()
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn into_parts(error: CoreError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case::not_found(CoreError::NotFound("x".to_string()), StatusCode::NOT_FOUND, "not-found")]
    #[case::empty_collection(
        CoreError::EmptyCollection("x".to_string()),
        StatusCode::NOT_FOUND,
        "empty-collection"
    )]
    #[case::constraint_violation(
        CoreError::ConstraintViolation("x".to_string()),
        StatusCode::BAD_REQUEST,
        "validation-error"
    )]
    #[case::database(
        CoreError::Database(InfraError::row_not_found("Endereco", "1")),
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal-error"
    )]
    #[tokio::test]
    async fn test_エラー種別ごとにステータスとtypeが決まる(
        #[case] error: CoreError,
        #[case] expected_status: StatusCode,
        #[case] expected_suffix: &str,
    ) {
        let (status, body) = into_parts(error).await;

        assert_eq!(status, expected_status);
        assert_eq!(body.status, expected_status.as_u16());
        assert!(
            body.error_type.ends_with(expected_suffix),
            "type が {expected_suffix} で終わること: {}",
            body.error_type
        );
    }

    #[tokio::test]
    async fn test_500系はdetailに内部情報を含めない() {
        let (_, body) = into_parts(CoreError::Database(InfraError::row_not_found(
            "Endereco", "77",
        )))
        .await;

        assert_eq!(body.detail, "内部エラーが発生しました");
        assert!(!body.detail.contains("77"));
    }

    #[test]
    fn test_domain_errorのnot_foundはnot_foundに変換される() {
        let err: CoreError = DomainError::NotFound {
            entity_type: "endereço",
            id:          "1".to_string(),
        }
        .into();

        assert!(matches!(err, CoreError::NotFound(msg) if msg == "Não foi possível encontrar endereço!"));
    }

    #[test]
    fn test_domain_errorのempty_collectionはempty_collectionに変換される() {
        let err: CoreError = DomainError::EmptyCollection {
            entity_type: "endereço",
        }
        .into();

        assert!(matches!(err, CoreError::EmptyCollection(msg) if msg == "Lista de endereço vazia"));
    }

    #[test]
    fn test_infra_errorの制約違反はconstraint_violationに変換される() {
        let err: CoreError = InfraError::constraint_violation(Some("cep"), "cep too long").into();

        assert!(matches!(err, CoreError::ConstraintViolation(msg) if msg == "cep too long"));
    }

    #[test]
    fn test_infra_errorのrow_not_foundはdatabaseに変換される() {
        let err: CoreError = InfraError::row_not_found("Endereco", "9").into();

        assert!(matches!(err, CoreError::Database(_)));
    }
}
