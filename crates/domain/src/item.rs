//! # タスク項目
//!
//! タスクリストの項目エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`ItemId`] は DB が採番した整数 ID をラップし、
//!   型安全性を確保
//! - **バリデーション**: [`ItemName`] の生成時に検証ロジックを実行
//! - **不変性**: エンティティフィールドは不変、変更は `with_*` メソッド経由
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todoflow_domain::item::{Item, ItemId, ItemName};
//!
//! let item = Item::from_db(
//!     ItemId::from_i64(1),
//!     ItemName::new("洗濯をする")?,
//!     false,
//!     chrono::Utc::now(),
//! );
//!
//! assert!(!item.completed());
//! let done = item.with_completed(true);
//! assert!(done.completed());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// タスク項目 ID（一意識別子）
///
/// データベースが採番する整数値（AUTOINCREMENT）をラップする。
/// Newtype パターンで型安全性を確保。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct ItemId(i64);

impl ItemId {
    /// 既存の整数値から項目 ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// タスク項目名（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
/// 保存される値は入力そのまま（トリムしない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemName(String);

impl ItemName {
    /// 項目名が許容する最大文字数
    pub const MAX_LENGTH: usize = 255;

    /// 項目名を作成する
    ///
    /// # バリデーション
    ///
    /// - 空白のみの文字列ではない
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "項目名は必須です".to_string(),
            ));
        }

        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(
                "項目名は255文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// タスク項目エンティティ
///
/// タスクリストの 1 行を表現する。ID はデータベースが採番するため、
/// エンティティの構築は常に採番済みデータからの復元（[`Item::from_db`]）になる。
///
/// # 不変条件
///
/// - `id` はデータベース内で一意
/// - `name` は空白のみではない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id:         ItemId,
    name:       ItemName,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl Item {
    /// 既存のデータから項目を復元する（データベースから取得時）
    pub fn from_db(
        id: ItemId,
        name: ItemName,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            completed,
            created_at,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // ビジネスロジックメソッド

    /// 名前を変更した新しいインスタンスを返す
    pub fn with_name(self, name: ItemName) -> Self {
        Self { name, ..self }
    }

    /// 完了フラグを変更した新しいインスタンスを返す
    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    // フィクスチャ

    /// テスト用の固定タイムスタンプ
    #[fixture]
    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[fixture]
    fn pending_item(now: DateTime<Utc>) -> Item {
        Item::from_db(
            ItemId::from_i64(1),
            ItemName::new("テスト項目").unwrap(),
            false,
            now,
        )
    }

    // ItemName のテスト

    #[test]
    fn test_項目名は通常の文字列を受け入れる() {
        assert!(ItemName::new("牛乳を買う").is_ok());
    }

    #[test]
    fn test_項目名は前後の空白を保持する() {
        let name = ItemName::new("  余白あり  ").unwrap();
        assert_eq!(name.as_str(), "  余白あり  ");
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case(" ", "半角スペースのみ")]
    #[case("   ", "連続スペース")]
    #[case("\t\n", "タブと改行のみ")]
    #[case(&"a".repeat(256), "255文字超過")]
    fn test_項目名は不正な値を拒否する(#[case] input: &str, #[case] _reason: &str) {
        assert!(ItemName::new(input).is_err());
    }

    #[test]
    fn test_項目名は255文字ちょうどを受け入れる() {
        assert!(ItemName::new("a".repeat(255)).is_ok());
    }

    // ItemId のテスト

    #[test]
    fn test_項目idはi64との相互変換ができる() {
        let id = ItemId::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    // Item のテスト

    #[rstest]
    fn test_復元した項目はフィールドを保持する(now: DateTime<Utc>, pending_item: Item) {
        assert_eq!(pending_item.id(), ItemId::from_i64(1));
        assert_eq!(pending_item.name().as_str(), "テスト項目");
        assert!(!pending_item.completed());
        assert_eq!(pending_item.created_at(), now);
    }

    #[rstest]
    fn test_完了フラグ変更後の状態(pending_item: Item) {
        let original = pending_item.clone();
        let sut = pending_item.with_completed(true);

        let expected = Item::from_db(
            original.id(),
            original.name().clone(),
            true,
            original.created_at(),
        );
        assert_eq!(sut, expected);
    }

    #[rstest]
    fn test_完了を解除した状態(pending_item: Item) {
        let completed = pending_item.with_completed(true);
        let reverted = completed.with_completed(false);

        assert!(!reverted.completed());
    }

    #[rstest]
    fn test_名前変更後の状態(pending_item: Item) {
        let original = pending_item.clone();
        let new_name = ItemName::new("新しい名前").unwrap();
        let sut = pending_item.with_name(new_name.clone());

        let expected = Item::from_db(
            original.id(),
            new_name,
            original.completed(),
            original.created_at(),
        );
        assert_eq!(sut, expected);
    }

    #[rstest]
    fn test_名前変更はcreated_atを変えない(now: DateTime<Utc>, pending_item: Item) {
        let sut = pending_item.with_name(ItemName::new("別の名前").unwrap());
        assert_eq!(sut.created_at(), now);
    }
}
