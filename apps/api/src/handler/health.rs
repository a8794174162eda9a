//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use todoflow_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認する。データベースへの接続は
/// 確認せず、アプリケーション自体の起動状態のみを返す。
///
/// # レスポンス
///
/// 常に 200 OK を返す。レスポンスボディには以下を含む:
///
/// - `status`: `"healthy"`（固定）
/// - `version`: `Cargo.toml` で定義されたバージョン
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}
