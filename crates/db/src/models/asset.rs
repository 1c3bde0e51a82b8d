use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

/// Lifecycle state of a tracked asset
#[derive(
    Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[sqlx(type_name = "asset_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Available,
    Assigned,
    InRepair,
    Retired,
}

/// Broad grouping used for filtering and reporting
#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[sqlx(type_name = "asset_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetCategory {
    Hardware,
    Software,
    Furniture,
    Vehicle,
    Other,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, TS)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub serial_number: Option<String>,
    pub assigned_to: Option<String>,
    pub purchase_cost: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateAsset {
    pub name: String,
    pub description: Option<String>,
    pub category: AssetCategory,
    pub status: Option<AssetStatus>,
    pub serial_number: Option<String>,
    pub assigned_to: Option<String>,
    pub purchase_cost: Option<f64>,
}

/// Partial update: fields left unset keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<AssetCategory>,
    pub status: Option<AssetStatus>,
    pub serial_number: Option<String>,
    pub assigned_to: Option<String>,
    pub purchase_cost: Option<f64>,
}

const ASSET_COLUMNS: &str =
    "id, name, description, category, status, serial_number, assigned_to, purchase_cost, created_at, updated_at";

impl Asset {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Asset>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets ORDER BY created_at DESC"
        ))
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_status(
        pool: &SqlitePool,
        status: AssetStatus,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Asset>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets WHERE status = $1 ORDER BY created_at DESC"
        ))
        .bind(status)
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Asset>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        id: Uuid,
        data: &CreateAsset,
    ) -> Result<Self, sqlx::Error> {
        let status = data.status.clone().unwrap_or_default();
        sqlx::query_as::<_, Asset>(&format!(
            "INSERT INTO assets (id, name, description, category, status, serial_number, assigned_to, purchase_cost)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {ASSET_COLUMNS}"
        ))
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(status)
        .bind(&data.serial_number)
        .bind(&data.assigned_to)
        .bind(data.purchase_cost)
        .fetch_one(pool)
        .await
    }

    /// Merge `data` over the stored row. Returns `None` when the asset
    /// does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateAsset,
    ) -> Result<Option<Self>, sqlx::Error> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let name = data.name.clone().unwrap_or(existing.name);
        let description = data.description.clone().or(existing.description);
        let category = data.category.clone().unwrap_or(existing.category);
        let status = data.status.clone().unwrap_or(existing.status);
        let serial_number = data.serial_number.clone().or(existing.serial_number);
        let assigned_to = data.assigned_to.clone().or(existing.assigned_to);
        let purchase_cost = data.purchase_cost.or(existing.purchase_cost);

        let asset = sqlx::query_as::<_, Asset>(&format!(
            "UPDATE assets
             SET name = $2, description = $3, category = $4, status = $5,
                 serial_number = $6, assigned_to = $7, purchase_cost = $8,
                 updated_at = datetime('now', 'subsec')
             WHERE id = $1
             RETURNING {ASSET_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(category)
        .bind(status)
        .bind(serial_number)
        .bind(assigned_to)
        .bind(purchase_cost)
        .fetch_one(pool)
        .await?;

        Ok(Some(asset))
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DBService;

    async fn test_db() -> DBService {
        DBService::new_in_memory()
            .await
            .expect("in-memory database")
    }

    fn laptop() -> CreateAsset {
        CreateAsset {
            name: "ThinkPad X1".to_string(),
            description: Some("14-inch developer laptop".to_string()),
            category: AssetCategory::Hardware,
            status: None,
            serial_number: Some("LX1-00421".to_string()),
            assigned_to: None,
            purchase_cost: Some(1899.0),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let db = test_db().await;
        let id = Uuid::new_v4();

        let created = Asset::create(&db.pool, id, &laptop()).await.unwrap();
        assert_eq!(created.id, id);
        assert_eq!(created.status, AssetStatus::Available);

        let found = Asset::find_by_id(&db.pool, id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = test_db().await;
        let found = Asset::find_by_id(&db.pool, Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_merges_unset_fields() {
        let db = test_db().await;
        let id = Uuid::new_v4();
        Asset::create(&db.pool, id, &laptop()).await.unwrap();

        let patch = UpdateAsset {
            name: None,
            description: None,
            category: None,
            status: Some(AssetStatus::Assigned),
            serial_number: None,
            assigned_to: Some("dana".to_string()),
            purchase_cost: None,
        };
        let updated = Asset::update(&db.pool, id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.name, "ThinkPad X1");
        assert_eq!(updated.status, AssetStatus::Assigned);
        assert_eq!(updated.assigned_to.as_deref(), Some("dana"));
        assert_eq!(updated.serial_number.as_deref(), Some("LX1-00421"));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let db = test_db().await;
        let patch = UpdateAsset {
            name: Some("Ghost".to_string()),
            description: None,
            category: None,
            status: None,
            serial_number: None,
            assigned_to: None,
            purchase_cost: None,
        };
        let updated = Asset::update(&db.pool, Uuid::new_v4(), &patch).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_find_by_status() {
        let db = test_db().await;
        let id = Uuid::new_v4();
        Asset::create(&db.pool, id, &laptop()).await.unwrap();

        let mut retired = laptop();
        retired.name = "Old monitor".to_string();
        retired.status = Some(AssetStatus::Retired);
        Asset::create(&db.pool, Uuid::new_v4(), &retired).await.unwrap();

        let available = Asset::find_by_status(&db.pool, AssetStatus::Available)
            .await
            .unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, id);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let id = Uuid::new_v4();
        Asset::create(&db.pool, id, &laptop()).await.unwrap();

        assert_eq!(Asset::delete(&db.pool, id).await.unwrap(), 1);
        assert_eq!(Asset::delete(&db.pool, id).await.unwrap(), 0);
        assert!(Asset::find_by_id(&db.pool, id).await.unwrap().is_none());
    }
}
