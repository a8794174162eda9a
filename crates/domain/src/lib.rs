//! # TodoFlow ドメイン層
//!
//! タスクリストのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`item::Item`]）
//! - **値オブジェクト**: 生成時にバリデーションを行う不変オブジェクト
//!   （[`item::ItemName`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use todoflow_domain::{DomainError, item::ItemName};
//!
//! // 名前のバリデーション
//! let name = ItemName::new("牛乳を買う")?;
//! assert_eq!(name.as_str(), "牛乳を買う");
//!
//! // 空白のみの名前は拒否される
//! assert!(ItemName::new("   ").is_err());
//! # Ok::<(), DomainError>(())
//! ```

pub mod clock;
pub mod error;
pub mod item;

pub use error::DomainError;
