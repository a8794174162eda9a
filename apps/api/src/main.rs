//! # TodoFlow API サーバー
//!
//! タスクリストの REST API と Web クライアントを提供するサーバー。
//!
//! ## 役割
//!
//! - **REST API**: タスク項目の一覧・作成・名前変更・完了トグル・削除
//! - **Web クライアント配信**: `assets/` 配下の静的ファイルを配信
//! - **データ保持**: インメモリ SQLite（プロセス再起動でリセット）
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `3001`） |
//! | `DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite::memory:`） |
//! | `ASSETS_DIR` | No | 静的アセットディレクトリ（デフォルト: `apps/api/assets`） |
//! | `LOG_FORMAT` | No | ログ形式 `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,todoflow=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p todoflow-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use todoflow_api::{app_builder::build_app, config::ApiConfig, handler::ItemState, usecase::ItemUseCaseImpl};
use todoflow_domain::{
   clock::{Clock, SystemClock},
   item::ItemName,
};
use todoflow_infra::{db, repository::{ItemRepository, SqliteItemRepository}};
use todoflow_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// 起動直後のデモ用シードデータを投入する
///
/// テーブルが空のときのみ投入する。インメモリ DB は起動のたびに
/// 空になるため、実質的に毎回投入される。
async fn seed_items(repo: &SqliteItemRepository, clock: &dyn Clock) -> anyhow::Result<()> {
   if !repo.find_all().await?.is_empty() {
      return Ok(());
   }

   for name in ["Item 1", "Item 2", "Item 3"] {
      let name = ItemName::new(name)?;
      repo.insert(&name, clock.now()).await?;
   }
   tracing::info!("シードデータを投入しました");
   Ok(())
}

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   init_tracing(TracingConfig::from_env("api"));

   // 全ログに service 名を付与するルートスパン
   let _tracing_guard = tracing::info_span!("app", service = "api").entered();

   // 設定読み込み
   let config = ApiConfig::from_env();

   tracing::info!(
      "TodoFlow API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成し、マイグレーションを適用
   let pool = db::create_pool(&config.database_url).await?;
   db::run_migrations(&pool).await?;
   tracing::info!("データベースに接続しました");

   // 依存コンポーネントを初期化
   let clock = Arc::new(SystemClock);
   let repository = SqliteItemRepository::new(pool.clone());
   seed_items(&repository, clock.as_ref()).await?;

   let usecase = ItemUseCaseImpl::new(repository, clock);
   let state = Arc::new(ItemState { usecase });

   // ルーター構築
   let app = build_app(state, &config.assets_dir);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("TodoFlow API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
