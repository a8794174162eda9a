//! # HTTP ハンドラモジュール
//!
//! API の各エンドポイントに対応するハンドラ関数を提供する。

pub mod health;
pub mod item;

pub use item::ItemState;
