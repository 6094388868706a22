use tracing::info;

use crate::{
    entities::skill::{
        NewSkill, NewSkillCategory, Skill, SkillCategory, SkillCategoryWithSkills,
        UpdateSkillCategory,
    },
    errors::AppError,
    repositories::skill::SkillRepository,
};

fn category_not_found() -> AppError {
    AppError::NotFound("Skill category not found".to_string())
}

/// Groups every category of `user_id` with its skills, keeping insertion order
/// on both levels. Two queries regardless of the number of categories.
pub(crate) async fn load_skill_tree<R>(repo: &R, user_id: i32) -> Result<Vec<SkillCategoryWithSkills>, AppError>
where
    R: SkillRepository + ?Sized,
{
    let categories = repo.get_skill_categories(user_id).await?;
    let mut skills = repo.get_skills_for_user(user_id).await?;

    let tree = categories
        .into_iter()
        .map(|category| {
            let (own, rest): (Vec<Skill>, Vec<Skill>) = skills
                .drain(..)
                .partition(|skill| skill.category_id == category.id);
            skills = rest;
            SkillCategoryWithSkills { category, skills: own }
        })
        .collect();

    Ok(tree)
}

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn get_skill_categories(&self, user_id: i32) -> Result<Vec<SkillCategory>, AppError> {
        self.skill_repo.get_skill_categories(user_id).await
    }

    pub async fn get_skill_category(&self, id: i32) -> Result<SkillCategory, AppError> {
        self.skill_repo
            .get_skill_category(id)
            .await?
            .ok_or_else(category_not_found)
    }

    /// Retrieves a category with the skills filed under it
    pub async fn get_skill_category_details(&self, id: i32) -> Result<SkillCategoryWithSkills, AppError> {
        let category = self.get_skill_category(id).await?;
        let skills = self.skill_repo.get_skills(category.id).await?;

        Ok(SkillCategoryWithSkills { category, skills })
    }

    /// Every category of a user with its skills
    pub async fn get_skill_tree(&self, user_id: i32) -> Result<Vec<SkillCategoryWithSkills>, AppError> {
        load_skill_tree(&self.skill_repo, user_id).await
    }

    pub async fn create_skill_category(&self, category: NewSkillCategory) -> Result<SkillCategory, AppError> {
        let created = self.skill_repo.create_skill_category(&category).await?;
        info!(category_id = created.id, user_id = created.user_id, "Skill category created");

        Ok(created)
    }

    pub async fn update_skill_category(
        &self,
        id: i32,
        patch: UpdateSkillCategory,
    ) -> Result<SkillCategory, AppError> {
        self.skill_repo
            .update_skill_category(id, &patch)
            .await?
            .ok_or_else(category_not_found)
    }

    pub async fn delete_skill_category(&self, id: i32) -> Result<(), AppError> {
        match self.skill_repo.delete_skill_category(id).await? {
            true => Ok(()),
            false => Err(category_not_found()),
        }
    }

    pub async fn get_skills(&self, category_id: i32) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.get_skills(category_id).await
    }

    pub async fn create_skill(&self, skill: NewSkill) -> Result<Skill, AppError> {
        self.skill_repo.create_skill(&skill).await
    }

    pub async fn delete_skill(&self, id: i32) -> Result<(), AppError> {
        match self.skill_repo.delete_skill(id).await? {
            true => Ok(()),
            false => Err(AppError::NotFound("Skill not found".to_string())),
        }
    }
}
