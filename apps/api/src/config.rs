//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::{env, path::PathBuf};

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// データベース接続 URL
   ///
   /// デフォルトはインメモリ SQLite（`sqlite::memory:`）。
   /// プロセス再起動でデータは消える。
   pub database_url: String,
   /// Web クライアントの静的アセットディレクトリ
   pub assets_dir: PathBuf,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   ///
   /// すべての項目にデフォルト値があるため、環境変数なしでも起動できる。
   pub fn from_env() -> Self {
      Self {
         host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: env::var("API_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .expect("API_PORT は有効なポート番号である必要があります"),
         database_url: env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite::memory:".to_string()),
         assets_dir: env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("apps/api/assets")),
      }
   }
}
