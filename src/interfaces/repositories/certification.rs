use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use validator::Validate;

use crate::{
    entities::{
        certification::{
            Certification, CertificationCredential, NewCertification, NewCertificationCredential,
            UpdateCertification,
        },
        option_fields::PatchString,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxCertificationRepo,
};

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn get_certifications(&self, user_id: i32) -> Result<Vec<Certification>, AppError>;
    async fn get_certification(&self, id: i32) -> Result<Option<Certification>, AppError>;
    async fn create_certification(&self, certification: &NewCertification) -> Result<Certification, AppError>;
    async fn update_certification(&self, id: i32, patch: &UpdateCertification) -> Result<Option<Certification>, AppError>;
    async fn delete_certification(&self, id: i32) -> Result<bool, AppError>;

    async fn get_certification_credentials(&self, certification_id: i32) -> Result<Vec<CertificationCredential>, AppError>;
    async fn create_certification_credential(&self, credential: &NewCertificationCredential) -> Result<CertificationCredential, AppError>;
    async fn delete_certification_credential(&self, id: i32) -> Result<bool, AppError>;
}

impl SqlxCertificationRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxCertificationRepo { pool }
    }
}

/// Appends `, column = $n` when a nullable column is touched by the patch.
fn push_nullable(builder: &mut QueryBuilder<'_, Postgres>, column: &str, field: &PatchString) {
    if let Some(value) = field.as_column() {
        builder
            .push(", ")
            .push(column)
            .push(" = ")
            .push_bind(value.map(str::to_owned));
    }
}

#[async_trait]
impl CertificationRepository for SqlxCertificationRepo {
    async fn get_certifications(&self, user_id: i32) -> Result<Vec<Certification>, AppError> {
        let certifications = sqlx::query_as::<_, Certification>(
            "SELECT * FROM certifications WHERE user_id = $1 ORDER BY id"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(certifications)
    }

    async fn get_certification(&self, id: i32) -> Result<Option<Certification>, AppError> {
        let certification = sqlx::query_as::<_, Certification>(
            "SELECT * FROM certifications WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(certification)
    }

    async fn create_certification(&self, certification: &NewCertification) -> Result<Certification, AppError> {
        certification.validate()?;

        let created = sqlx::query_as::<_, Certification>(
            r#"
            INSERT INTO certifications (
                user_id, title, platform, description, pdf_path,
                image_path, icon_name, completion_date, duration
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#
        )
        .bind(certification.user_id)
        .bind(&certification.title)
        .bind(&certification.platform)
        .bind(&certification.description)
        .bind(&certification.pdf_path)
        .bind(&certification.image_path)
        .bind(&certification.icon_name)
        .bind(&certification.completion_date)
        .bind(&certification.duration)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_certification(&self, id: i32, patch: &UpdateCertification) -> Result<Option<Certification>, AppError> {
        patch.validate()?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE certifications SET updated_at = NOW()");

        if let Some(user_id) = patch.user_id {
            builder.push(", user_id = ").push_bind(user_id);
        }
        if let Some(title) = &patch.title {
            builder.push(", title = ").push_bind(title.clone());
        }
        if let Some(platform) = &patch.platform {
            builder.push(", platform = ").push_bind(platform.clone());
        }
        if let Some(description) = &patch.description {
            builder.push(", description = ").push_bind(description.clone());
        }
        push_nullable(&mut builder, "pdf_path", &patch.pdf_path);
        push_nullable(&mut builder, "image_path", &patch.image_path);
        push_nullable(&mut builder, "icon_name", &patch.icon_name);
        push_nullable(&mut builder, "completion_date", &patch.completion_date);
        push_nullable(&mut builder, "duration", &patch.duration);

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<Certification>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_certification(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_certification_credentials(&self, certification_id: i32) -> Result<Vec<CertificationCredential>, AppError> {
        let credentials = sqlx::query_as::<_, CertificationCredential>(
            "SELECT * FROM certification_credentials WHERE certification_id = $1 ORDER BY id"
        )
        .bind(certification_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(credentials)
    }

    async fn create_certification_credential(&self, credential: &NewCertificationCredential) -> Result<CertificationCredential, AppError> {
        credential.validate()?;

        let created = sqlx::query_as::<_, CertificationCredential>(
            r#"
            INSERT INTO certification_credentials (certification_id, "type", value)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(credential.certification_id)
        .bind(&credential.credential_type)
        .bind(&credential.value)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_certification_credential(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM certification_credentials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
