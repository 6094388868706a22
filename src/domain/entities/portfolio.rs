use serde::{Deserialize, Serialize};

use crate::entities::{
    certification::CertificationDetails,
    project::ProjectDetails,
    skill::SkillCategoryWithSkills,
    user::PublicUser,
};

/// Everything the single-page site renders for one owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub owner: PublicUser,
    pub projects: Vec<ProjectDetails>,
    pub certifications: Vec<CertificationDetails>,
    pub skill_categories: Vec<SkillCategoryWithSkills>,
}
