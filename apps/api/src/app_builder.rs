//! # アプリケーション構築
//!
//! ルーターとミドルウェアの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::{path::Path, sync::Arc};

use axum::{Router, routing::get};
use todoflow_infra::repository::ItemRepository;
use todoflow_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   cors::CorsLayer,
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   services::{ServeDir, ServeFile},
   trace::TraceLayer,
};

use crate::handler::{
   ItemState,
   health::health_check,
   item::{create_item, delete_item, list_items, update_item_name, update_item_completed},
};

/// ルーター定義とミドルウェアの適用を行う
///
/// API ルートにマッチしないリクエストは `assets_dir` 配下の
/// 静的ファイル（Web クライアント）にフォールバックする。
/// 該当ファイルがないパスには `index.html` を返す。
pub fn build_app<R>(state: Arc<ItemState<R>>, assets_dir: &Path) -> Router
where
   R: ItemRepository + 'static,
{
   Router::new()
      .route("/health", get(health_check))
      .route("/api/items", get(list_items::<R>).post(create_item::<R>))
      .route(
         "/api/items/{id}",
         axum::routing::put(update_item_name::<R>)
            .patch(update_item_completed::<R>)
            .delete(delete_item::<R>),
      )
      .with_state(state)
      // Web クライアント（静的ファイル）。未知のパスは index.html にフォールバックする
      .fallback_service(
         ServeDir::new(assets_dir).not_found_service(ServeFile::new(assets_dir.join("index.html"))),
      )
      // ブラウザから直接叩けるように全オリジンを許可する
      .layer(CorsLayer::permissive())
      // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
      // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
      // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
      // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
