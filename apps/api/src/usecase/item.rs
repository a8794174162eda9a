//! # タスク項目ユースケース
//!
//! タスク項目の一覧・作成・名前変更・完了トグル・削除に関する
//! ビジネスロジックを実装する。

use std::sync::Arc;

use todoflow_domain::{
   DomainError,
   clock::Clock,
   item::{Item, ItemId, ItemName},
};
use todoflow_infra::repository::ItemRepository;

use crate::error::ApiError;

/// タスク項目ユースケース実装
///
/// R: ItemRepository
pub struct ItemUseCaseImpl<R> {
   repo:  R,
   clock: Arc<dyn Clock>,
}

impl<R> ItemUseCaseImpl<R>
where
   R: ItemRepository,
{
   pub fn new(repo: R, clock: Arc<dyn Clock>) -> Self {
      Self { repo, clock }
   }

   /// 全項目を取得する（新しい順）
   pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
      Ok(self.repo.find_all().await?)
   }

   /// 項目を作成する
   ///
   /// 名前をバリデーションし、採番済みの項目を返す。
   /// 新規項目は常に未完了で作成される。
   pub async fn create_item(&self, name: &str) -> Result<Item, ApiError> {
      let name = ItemName::new(name)?;

      let item = self.repo.insert(&name, self.clock.now()).await?;
      tracing::info!(item_id = %item.id(), "項目を作成しました");
      Ok(item)
   }

   /// 項目名を変更する
   ///
   /// 対象が存在しない場合は `NotFound` を返す（upsert しない）。
   pub async fn rename_item(&self, id: ItemId, name: &str) -> Result<Item, ApiError> {
      let name = ItemName::new(name)?;

      let item = self
         .repo
         .find_by_id(id)
         .await?
         .ok_or_else(|| not_found(id))?;

      self.repo.update_name(id, &name).await?;
      Ok(item.with_name(name))
   }

   /// 完了フラグを設定する
   ///
   /// 対象が存在しない場合は `NotFound` を返す。
   pub async fn set_completed(&self, id: ItemId, completed: bool) -> Result<Item, ApiError> {
      let item = self
         .repo
         .find_by_id(id)
         .await?
         .ok_or_else(|| not_found(id))?;

      self.repo.update_completed(id, completed).await?;
      Ok(item.with_completed(completed))
   }

   /// 項目を削除する
   ///
   /// 対象が存在しない場合は `NotFound` を返す。
   /// 同じ ID の 2 回目の削除も `NotFound` になる。
   pub async fn delete_item(&self, id: ItemId) -> Result<(), ApiError> {
      let deleted = self.repo.delete(id).await?;
      if !deleted {
         return Err(not_found(id).into());
      }
      tracing::info!(item_id = %id, "項目を削除しました");
      Ok(())
   }
}

fn not_found(id: ItemId) -> DomainError {
   DomainError::NotFound {
      entity_type: "項目",
      id:          id.to_string(),
   }
}
