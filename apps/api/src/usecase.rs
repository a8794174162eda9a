//! # ユースケース層
//!
//! ハンドラから呼び出されるビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - リポジトリトレイトに対してジェネリックにし、テストではモックを注入する
//! - バリデーションと NotFound 判定はここで行い、ハンドラは薄く保つ

pub mod item;

pub use item::ItemUseCaseImpl;
