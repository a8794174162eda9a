//! # ItemRepository
//!
//! タスク項目の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **トレイトによる抽象化**: ユースケース層はトレイト経由で利用し、
//!   テストではインメモリモックに差し替える
//! - **採番は DB に委譲**: `INSERT ... RETURNING` で採番済みの行を取得する
//! - **一覧は新しい順**: `created_at DESC, id DESC` で返し、
//!   同時刻に投入された行の順序も決定的にする

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use todoflow_domain::item::{Item, ItemId, ItemName};

use crate::error::InfraError;

/// タスク項目リポジトリトレイト
///
/// タスク項目の永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// 全項目を取得する（新しい順）
    async fn find_all(&self) -> Result<Vec<Item>, InfraError>;

    /// ID で項目を検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(item))`: 項目が見つかった場合
    /// - `Ok(None)`: 項目が見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, InfraError>;

    /// 項目を挿入する
    ///
    /// ID はデータベースが採番する。採番済みの行を返す。
    /// 新規項目は常に未完了（`completed = false`）で作成される。
    async fn insert(&self, name: &ItemName, now: DateTime<Utc>) -> Result<Item, InfraError>;

    /// 項目名を更新する
    async fn update_name(&self, id: ItemId, name: &ItemName) -> Result<(), InfraError>;

    /// 完了フラグを更新する
    async fn update_completed(&self, id: ItemId, completed: bool) -> Result<(), InfraError>;

    /// 項目を削除する
    ///
    /// 行が削除された場合は `true`、対象が存在しなかった場合は `false` を返す。
    async fn delete(&self, id: ItemId) -> Result<bool, InfraError>;
}

/// DB の行表現
///
/// `completed` は SQLite の INTEGER（0/1）、`created_at` は RFC 3339 テキスト。
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id:         i64,
    name:       String,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl ItemRow {
    /// ドメインエンティティへ変換する
    ///
    /// DB に保存された値がドメインの不変条件を満たさない場合は
    /// `InfraError::Unexpected` を返す。
    fn into_domain(self) -> Result<Item, InfraError> {
        let name = ItemName::new(self.name).map_err(|e| InfraError::unexpected(e.to_string()))?;
        Ok(Item::from_db(
            ItemId::from_i64(self.id),
            name,
            self.completed,
            self.created_at,
        ))
    }
}

/// SQLite 実装の ItemRepository
#[derive(Debug, Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
                SELECT id, name, completed, created_at
                FROM items
                ORDER BY created_at DESC, id DESC
                "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ItemRow::into_domain).collect()
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, InfraError> {
        let row: Option<ItemRow> = sqlx::query_as(
            r#"
                SELECT id, name, completed, created_at
                FROM items
                WHERE id = ?
                "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ItemRow::into_domain).transpose()
    }

    async fn insert(&self, name: &ItemName, now: DateTime<Utc>) -> Result<Item, InfraError> {
        let row: ItemRow = sqlx::query_as(
            r#"
                INSERT INTO items (name, completed, created_at)
                VALUES (?, 0, ?)
                RETURNING id, name, completed, created_at
                "#,
        )
        .bind(name.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_domain()
    }

    async fn update_name(&self, id: ItemId, name: &ItemName) -> Result<(), InfraError> {
        sqlx::query(
            r#"
                UPDATE items
                SET name = ?
                WHERE id = ?
                "#,
        )
        .bind(name.as_str())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_completed(&self, id: ItemId, completed: bool) -> Result<(), InfraError> {
        sqlx::query(
            r#"
                UPDATE items
                SET completed = ?
                WHERE id = ?
                "#,
        )
        .bind(completed)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
                DELETE FROM items
                WHERE id = ?
                "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteItemRepository>();
    }
}
