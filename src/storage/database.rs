//! Database-backed ticket store
//!
//! Parallel variant of the persistence layer: instead of the file/memory
//! fallback chain, tickets live in an external SQLite database reached
//! through a connection pool. Identifiers are database-assigned, identity
//! lookups lower/trim in SQL, and an UPDATE that modifies zero rows is
//! reported as a failed write.

use crate::core::{NewTicket, Ticket, TicketId, TicketPatch, TicketReceipt};
use crate::error::{HelpdeskError, Result};
use crate::storage::TicketStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::str::FromStr;
use tracing::info;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tickets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    address TEXT NOT NULL,
    issue TEXT NOT NULL,
    price INTEGER NOT NULL,
    confirmation_number INTEGER NOT NULL,
    created_at TEXT NOT NULL
)";

/// SQLite-backed ticket store
#[derive(Debug, Clone)]
pub struct DatabaseStorage {
    pool: SqlitePool,
}

impl DatabaseStorage {
    /// Connect to the database at `url` and ensure the schema exists
    ///
    /// Accepts any sqlite URL, including `sqlite::memory:`. File databases
    /// are created when missing.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        // A shared in-memory database only exists per connection; keep the
        // pool at one connection so every caller sees the same data.
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        info!(url, "connected database-backed ticket store");
        Ok(Self { pool })
    }
}

fn db_id(id: TicketId) -> Result<i64> {
    i64::try_from(id.value())
        .map_err(|_| HelpdeskError::custom(format!("ticket id {id} out of range")))
}

fn row_to_ticket(row: &SqliteRow) -> Result<Ticket> {
    let raw_id: i64 = row.try_get("id")?;
    let id = u64::try_from(raw_id)
        .map_err(|_| HelpdeskError::custom(format!("negative ticket id {raw_id}")))?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Ticket {
        id: TicketId::new(id),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
        issue: row.try_get("issue")?,
        price: row.try_get("price")?,
        confirmation_number: row.try_get("confirmation_number")?,
        created_at,
    })
}

#[async_trait]
impl TicketStore for DatabaseStorage {
    async fn create(&self, new_ticket: NewTicket) -> Result<TicketReceipt> {
        let result = sqlx::query(
            "INSERT INTO tickets \
             (name, email, phone, address, issue, price, confirmation_number, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&new_ticket.name)
        .bind(&new_ticket.email)
        .bind(&new_ticket.phone)
        .bind(&new_ticket.address)
        .bind(&new_ticket.issue)
        .bind(new_ticket.price)
        .bind(new_ticket.confirmation_number)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let id = u64::try_from(result.last_insert_rowid())
            .map_err(|_| HelpdeskError::custom("database returned a negative row id"))?;
        Ok(TicketReceipt {
            id: TicketId::new(id),
            confirmation_number: new_ticket.confirmation_number,
        })
    }

    async fn list(&self) -> Result<Vec<Ticket>> {
        let rows = sqlx::query("SELECT * FROM tickets ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_ticket).collect()
    }

    async fn find(
        &self,
        name: &str,
        email: &str,
        confirmation_number: u32,
    ) -> Result<Option<Ticket>> {
        let row = sqlx::query(
            "SELECT * FROM tickets \
             WHERE lower(trim(name)) = lower(trim(?1)) \
               AND lower(trim(email)) = lower(trim(?2)) \
               AND confirmation_number = ?3 \
             ORDER BY id LIMIT 1",
        )
        .bind(name)
        .bind(email)
        .bind(confirmation_number)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_ticket).transpose()
    }

    async fn get(&self, id: TicketId) -> Result<Option<Ticket>> {
        let row = sqlx::query("SELECT * FROM tickets WHERE id = ?1")
            .bind(db_id(id)?)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_ticket).transpose()
    }

    async fn update(&self, id: TicketId, patch: TicketPatch) -> Result<()> {
        let result = sqlx::query(
            "UPDATE tickets SET \
             phone = coalesce(?1, phone), \
             address = coalesce(?2, address), \
             issue = coalesce(?3, issue), \
             price = coalesce(?4, price) \
             WHERE id = ?5",
        )
        .bind(&patch.phone)
        .bind(&patch.address)
        .bind(&patch.issue)
        .bind(patch.price)
        .bind(db_id(id)?)
        .execute(&self.pool)
        .await?;

        // Zero modified rows means the write did not take effect.
        if result.rows_affected() == 0 {
            return Err(HelpdeskError::UpdateFailed { id: id.value() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_new_ticket;

    async fn memory_db() -> DatabaseStorage {
        DatabaseStorage::connect("sqlite::memory:")
            .await
            .expect("in-memory database should connect")
    }

    #[tokio::test]
    async fn test_ids_are_database_assigned() {
        let store = memory_db().await;
        let first = store
            .create(sample_new_ticket("Jane Doe", "jane@example.com", 11111))
            .await
            .unwrap();
        let second = store
            .create(sample_new_ticket("John Roe", "john@example.com", 22222))
            .await
            .unwrap();
        assert_eq!(first.id, TicketId::new(1));
        assert_eq!(second.id, TicketId::new(2));
    }

    #[tokio::test]
    async fn test_find_lowercases_and_trims_in_sql() {
        let store = memory_db().await;
        store
            .create(sample_new_ticket("Jane Doe", "jane@example.com", 12345))
            .await
            .unwrap();

        let found = store
            .find(" jane DOE ", "JANE@example.com ", 12345)
            .await
            .unwrap();
        assert!(found.is_some());

        let missing = store.find("Jane Doe", "jane@example.com", 11111).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_zero_rows_is_failure() {
        let store = memory_db().await;
        let patch = TicketPatch {
            phone: Some("555-0000".to_string()),
            ..TicketPatch::default()
        };
        let err = store
            .update(TicketId::new(42), patch)
            .await
            .expect_err("update of a missing row should fail");
        assert!(matches!(err, HelpdeskError::UpdateFailed { id: 42 }));
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let store = memory_db().await;
        let receipt = store
            .create(sample_new_ticket("Jane Doe", "jane@example.com", 12345))
            .await
            .unwrap();

        let patch = TicketPatch {
            issue: Some("Password reset and login problems".to_string()),
            price: Some(15),
            ..TicketPatch::default()
        };
        store.update(receipt.id, patch).await.unwrap();

        let ticket = store.get(receipt.id).await.unwrap().unwrap();
        assert_eq!(ticket.issue, "Password reset and login problems");
        assert_eq!(ticket.price, 15);
        assert_eq!(ticket.created_at.timezone(), Utc);
    }
}
