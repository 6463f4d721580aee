use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::voucher::model::Voucher;
use business::domain::voucher::repository::VoucherRepository;

use super::entity::{VOUCHER_COLUMNS, VoucherEntity, discount_to_column};
use crate::errors::map_sqlx_error;

pub struct VoucherRepositoryPostgres {
    pool: PgPool,
}

impl VoucherRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoucherRepository for VoucherRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Voucher>, RepositoryError> {
        let entities = sqlx::query_as::<_, VoucherEntity>(&format!(
            "SELECT {VOUCHER_COLUMNS} FROM vouchers ORDER BY code"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Voucher, RepositoryError> {
        let entity = sqlx::query_as::<_, VoucherEntity>(&format!(
            "SELECT {VOUCHER_COLUMNS} FROM vouchers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, RepositoryError> {
        let entity = sqlx::query_as::<_, VoucherEntity>(&format!(
            "SELECT {VOUCHER_COLUMNS} FROM vouchers WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entity.map(VoucherEntity::into_domain).transpose()
    }

    async fn save(&self, voucher: &Voucher) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO vouchers (id, code, discount_kind, discount_value, expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                code = EXCLUDED.code,
                discount_kind = EXCLUDED.discount_kind,
                discount_value = EXCLUDED.discount_value,
                expires_at = EXCLUDED.expires_at,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(voucher.id)
        .bind(&voucher.code)
        .bind(voucher.discount.kind().to_string())
        .bind(discount_to_column(&voucher.discount))
        .bind(voucher.expires_at)
        .bind(voucher.created_at)
        .bind(voucher.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM vouchers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
