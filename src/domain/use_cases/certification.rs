use tracing::info;

use crate::{
    entities::certification::{
        Certification, CertificationCredential, CertificationDetails, NewCertification,
        NewCertificationCredential, UpdateCertification,
    },
    errors::AppError,
    repositories::certification::CertificationRepository,
};

fn certification_not_found() -> AppError {
    AppError::NotFound("Certification not found".to_string())
}

pub(crate) async fn load_certification_details<R>(
    repo: &R,
    certification: Certification,
) -> Result<CertificationDetails, AppError>
where
    R: CertificationRepository + ?Sized,
{
    let credentials = repo.get_certification_credentials(certification.id).await?;

    Ok(CertificationDetails { certification, credentials })
}

pub struct CertificationHandler<R>
where
    R: CertificationRepository,
{
    pub certification_repo: R,
}

impl<R> CertificationHandler<R>
where
    R: CertificationRepository,
{
    pub fn new(certification_repo: R) -> Self {
        CertificationHandler { certification_repo }
    }

    pub async fn get_certifications(&self, user_id: i32) -> Result<Vec<Certification>, AppError> {
        self.certification_repo.get_certifications(user_id).await
    }

    pub async fn get_certification(&self, id: i32) -> Result<Certification, AppError> {
        self.certification_repo
            .get_certification(id)
            .await?
            .ok_or_else(certification_not_found)
    }

    /// Retrieves a certification with its verification credentials
    pub async fn get_certification_details(&self, id: i32) -> Result<CertificationDetails, AppError> {
        let certification = self.get_certification(id).await?;
        load_certification_details(&self.certification_repo, certification).await
    }

    pub async fn create_certification(&self, certification: NewCertification) -> Result<Certification, AppError> {
        let created = self.certification_repo.create_certification(&certification).await?;
        info!(certification_id = created.id, user_id = created.user_id, "Certification created");

        Ok(created)
    }

    pub async fn update_certification(
        &self,
        id: i32,
        patch: UpdateCertification,
    ) -> Result<Certification, AppError> {
        self.certification_repo
            .update_certification(id, &patch)
            .await?
            .ok_or_else(certification_not_found)
    }

    pub async fn delete_certification(&self, id: i32) -> Result<(), AppError> {
        match self.certification_repo.delete_certification(id).await? {
            true => {
                info!(certification_id = id, "Certification deleted");
                Ok(())
            }
            false => Err(certification_not_found()),
        }
    }

    pub async fn get_certification_credentials(
        &self,
        certification_id: i32,
    ) -> Result<Vec<CertificationCredential>, AppError> {
        self.certification_repo.get_certification_credentials(certification_id).await
    }

    pub async fn create_certification_credential(
        &self,
        credential: NewCertificationCredential,
    ) -> Result<CertificationCredential, AppError> {
        self.certification_repo.create_certification_credential(&credential).await
    }

    pub async fn delete_certification_credential(&self, id: i32) -> Result<(), AppError> {
        match self.certification_repo.delete_certification_credential(id).await? {
            true => Ok(()),
            false => Err(AppError::NotFound("Credential not found".to_string())),
        }
    }
}
