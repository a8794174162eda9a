//! # リポジトリ
//!
//! 永続化操作をトレイトで定義し、SQLite 実装を提供する。
//!
//! ## 設計方針
//!
//! - トレイトはユースケース層から利用され、テストではモック実装に差し替える
//! - SQL はリポジトリ実装に閉じ込め、ドメイン層に漏らさない

pub mod item_repository;

pub use item_repository::{ItemRepository, SqliteItemRepository};
