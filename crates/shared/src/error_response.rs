//! # エラーレスポンス
//!
//! API 全体で共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API 層の責務（shared に axum 依存を入れない）
//! - ワイヤ形式は `{ "error": "..." }`。Web クライアントはこの形式を前提に
//!   エラーバナーを表示する

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// すべてのエラーステータス（400 / 404 / 500）で統一された形式。
/// 500 系では内部情報を漏らさないよう、固定メッセージを使用する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// エラーメッセージからレスポンスを作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// 500 Internal Server Error 用の固定メッセージ
    ///
    /// detail は固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new("内部エラーが発生しました")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newでメッセージが設定される() {
        let error = ErrorResponse::new("項目名は必須です");
        assert_eq!(error.error, "項目名は必須です");
    }

    #[test]
    fn test_jsonシリアライズでerrorフィールドのみ出力される() {
        let error = ErrorResponse::new("項目が見つかりません");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "項目が見つかりません" }));
    }

    #[test]
    fn test_internal_errorは固定メッセージを返す() {
        let error = ErrorResponse::internal_error();
        assert_eq!(error.error, "内部エラーが発生しました");
    }

    #[test]
    fn test_jsonデシリアライズが正しく動作する() {
        let json = r#"{"error": "不正なリクエスト"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(error, ErrorResponse::new("不正なリクエスト"));
    }
}
