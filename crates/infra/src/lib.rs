//! # TodoFlow インフラ層
//!
//! データベースアクセスを担当するクレート。
//!
//! ## 設計方針
//!
//! - **リポジトリパターン**: 永続化操作をトレイトで抽象化し、
//!   ユースケース層からインフラ実装を切り離す
//! - **sqlx 採用**: 非同期サポート、接続プール、マイグレーション
//! - **SQLite インメモリ**: データベースはプロセスの寿命と同じ
//!   （再起動で消える）。単一接続に固定することでインメモリ DB を共有する
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プールの作成とマイグレーション
//! - [`error`] - インフラ層エラー（SpanTrace 付き）
//! - [`repository`] - リポジトリトレイトと SQLite 実装

pub mod db;
pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
