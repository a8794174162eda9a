//! # SQLite データベース接続管理
//!
//! データベース接続プールの作成とマイグレーションを行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: sqlx の `SqlitePool` を使用し、アプリケーション全体で共有
//! - **インメモリ DB**: デフォルトの接続先は `sqlite::memory:`。
//!   インメモリ DB は接続ごとに独立するため、プールを単一接続に固定し、
//!   アイドルタイムアウトと最大寿命を無効化してプロセスの寿命まで保持する
//! - **マイグレーション**: `sqlx::migrate!()` でスキーマを埋め込み、
//!   起動時に冪等に適用する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todoflow_infra::db;
//!
//! async fn example() -> Result<(), sqlx::Error> {
//!     let pool = db::create_pool("sqlite::memory:").await?;
//!     db::run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// SQLite 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// アプリケーション全体で共有する。
///
/// # 引数
///
/// * `database_url` - SQLite 接続 URL
///   - インメモリ: `sqlite::memory:`
///   - ファイル: `sqlite://todoflow.db`（存在しない場合は作成される）
///
/// # 設定値
///
/// - `max_connections(1)`: インメモリ DB を全リクエストで共有するための固定値
/// - `idle_timeout` / `max_lifetime` 無効: 接続が切れるとインメモリ DB が
///   破棄されるため
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// データベースマイグレーションを実行する
///
/// `sqlx::migrate!()` マクロで埋め込まれたマイグレーションファイルを
/// 順番に適用する。適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_インメモリdbに接続できる() {
        let pool = create_pool("sqlite::memory:").await.unwrap();

        let row: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.0, 1);
    }

    #[tokio::test]
    async fn test_マイグレーションでitemsテーブルが作成される() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.0, 0);
    }

    #[tokio::test]
    async fn test_マイグレーションは冪等に適用できる() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.0, 0);
    }
}
