//! # TodoFlow API サーバー
//!
//! タスクリストの REST API と Web クライアントを提供するサーバーの
//! ライブラリクレート。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Web Client  │────▶│   REST API   │────▶│    SQLite    │
//! │ (静的ファイル) │     │  (port 3001) │     │ (インメモリ)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーターとミドルウェアの組み立て
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ビジネスロジック
//!
//! ## 依存関係
//!
//! - `todoflow_domain`: ドメインモデル、エラー定義
//! - `todoflow_infra`: データベース接続とリポジトリ
//! - `todoflow_shared`: 共有ユーティリティ（オブザーバビリティ等）

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
