//! # アプリケーション構築
//!
//! DI（リポジトリ・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use enderecos_infra::repository::EnderecoRepository;
use enderecos_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        EnderecoState,
        ReadinessState,
        delete_endereco,
        get_endereco,
        health_check,
        list_enderecos,
        readiness_check,
        store_endereco,
        update_endereco,
    },
    usecase::EnderecoUseCaseImpl,
};

/// DI コンテナの構築とルーター定義を行う
///
/// リポジトリ → ユースケース → State → Router の順に組み立てる。
pub fn build_app(
    endereco_repository: Arc<dyn EnderecoRepository>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let endereco_state = Arc::new(EnderecoState {
        usecase: EnderecoUseCaseImpl::new(endereco_repository),
    });

    // レイヤー順序（外側から）:
    // 1. SetRequestIdLayer: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: request_id を含むスパンを作成し、全ログに自動注入
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(endereco_routes(endereco_state))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

fn endereco_routes(state: Arc<EnderecoState>) -> Router {
    Router::new()
        .route("/endereco/todos", get(list_enderecos))
        .route("/endereco/salvar", post(store_endereco))
        .route("/endereco/{id}", get(get_endereco))
        .route("/endereco/atualizar/{id}", patch(update_endereco))
        .route("/endereco/deletar/{id}", delete(delete_endereco))
        .with_state(state)
}
