//! # タスク項目ハンドラ
//!
//! タスクリスト項目の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/items` - 項目一覧（新しい順）
//! - `POST /api/items` - 項目作成
//! - `PUT /api/items/{id}` - 項目名変更
//! - `PATCH /api/items/{id}` - 完了フラグ設定
//! - `DELETE /api/items/{id}` - 項目削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{
      Path,
      State,
      rejection::{JsonRejection, PathRejection},
   },
   http::StatusCode,
   response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todoflow_domain::item::{Item, ItemId};
use todoflow_infra::repository::ItemRepository;

use crate::{error::ApiError, usecase::ItemUseCaseImpl};

/// タスク項目 API の共有状態
pub struct ItemState<R> {
   pub usecase: ItemUseCaseImpl<R>,
}

// --- リクエスト/レスポンス型 ---

/// 項目作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
   pub name: String,
}

/// 項目名変更リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
   pub name: String,
}

/// 完了フラグ設定リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateCompletedRequest {
   pub completed: bool,
}

/// タスク項目 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ItemDto {
   pub id:         i64,
   pub name:       String,
   pub completed:  bool,
   pub created_at: String,
}

impl ItemDto {
   fn from_item(item: &Item) -> Self {
      Self {
         id:         item.id().as_i64(),
         name:       item.name().as_str().to_string(),
         completed:  item.completed(),
         created_at: item.created_at().to_rfc3339(),
      }
   }
}

/// 項目削除レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResultDto {
   pub message: String,
   pub id:      i64,
}

// --- 抽出エラーの変換 ---
//
// 不正なリクエストでも `{"error": ...}` のワイヤ形式を崩さないよう、
// axum の抽出エラー（非数値の ID、真偽値でない completed など）を
// `ApiError::BadRequest` に変換する。

fn parse_id(path: Result<Path<i64>, PathRejection>) -> Result<ItemId, ApiError> {
   let Path(id) = path
      .map_err(|_| ApiError::BadRequest("有効な項目 ID が必要です".to_string()))?;
   Ok(ItemId::from_i64(id))
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>, message: &str) -> Result<T, ApiError> {
   let Json(req) = body.map_err(|_| ApiError::BadRequest(message.to_string()))?;
   Ok(req)
}

// --- ハンドラ ---

/// GET /api/items
///
/// 全項目を作成日時の新しい順で取得する。レスポンスは項目の配列そのもの。
#[tracing::instrument(skip_all)]
pub async fn list_items<R>(
   State(state): State<Arc<ItemState<R>>>,
) -> Result<impl IntoResponse, ApiError>
where
   R: ItemRepository + 'static,
{
   let items = state.usecase.list_items().await?;

   let dtos: Vec<ItemDto> = items.iter().map(ItemDto::from_item).collect();
   Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/items
///
/// 項目を作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成された項目
/// - `400 Bad Request`: ボディが不正、名前が空白のみ、または長すぎる
#[tracing::instrument(skip_all)]
pub async fn create_item<R>(
   State(state): State<Arc<ItemState<R>>>,
   body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
   R: ItemRepository + 'static,
{
   let req = parse_body(body, "項目名は必須です")?;

   let item = state.usecase.create_item(&req.name).await?;

   Ok((StatusCode::CREATED, Json(ItemDto::from_item(&item))))
}

/// PUT /api/items/{id}
///
/// 項目名を変更する。
///
/// ## レスポンス
///
/// - `200 OK`: 変更後の項目
/// - `400 Bad Request`: ID が非数値、ボディが不正、名前が空白のみ、または長すぎる
/// - `404 Not Found`: 項目が存在しない
#[tracing::instrument(skip_all)]
pub async fn update_item_name<R>(
   State(state): State<Arc<ItemState<R>>>,
   path: Result<Path<i64>, PathRejection>,
   body: Result<Json<UpdateNameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
   R: ItemRepository + 'static,
{
   let id = parse_id(path)?;
   let req = parse_body(body, "項目名は必須です")?;

   let item = state.usecase.rename_item(id, &req.name).await?;

   Ok((StatusCode::OK, Json(ItemDto::from_item(&item))))
}

/// PATCH /api/items/{id}
///
/// 完了フラグを設定する。
///
/// ## レスポンス
///
/// - `200 OK`: 変更後の項目
/// - `400 Bad Request`: ID が非数値、または `completed` が真偽値でない
/// - `404 Not Found`: 項目が存在しない
#[tracing::instrument(skip_all)]
pub async fn update_item_completed<R>(
   State(state): State<Arc<ItemState<R>>>,
   path: Result<Path<i64>, PathRejection>,
   body: Result<Json<UpdateCompletedRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
   R: ItemRepository + 'static,
{
   let id = parse_id(path)?;
   let req = parse_body(body, "completed は真偽値である必要があります")?;

   let item = state.usecase.set_completed(id, req.completed).await?;

   Ok((StatusCode::OK, Json(ItemDto::from_item(&item))))
}

/// DELETE /api/items/{id}
///
/// 項目を削除する。
///
/// ## レスポンス
///
/// - `200 OK`: 削除結果（`{"message": ..., "id": ...}`）
/// - `400 Bad Request`: ID が非数値
/// - `404 Not Found`: 項目が存在しない（同じ ID の 2 回目の削除を含む）
#[tracing::instrument(skip_all)]
pub async fn delete_item<R>(
   State(state): State<Arc<ItemState<R>>>,
   path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError>
where
   R: ItemRepository + 'static,
{
   let id = parse_id(path)?;

   state.usecase.delete_item(id).await?;

   let result = DeleteResultDto {
      message: "項目を削除しました".to_string(),
      id:      id.as_i64(),
   };
   Ok((StatusCode::OK, Json(result)))
}
