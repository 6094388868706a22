
use std::{collections::HashSet, time::Duration};

use portfolio_data::{
    entities::{
        certification::{NewCertification, NewCertificationCredential, UpdateCertification},
        message::{MessageStatus, NewMessage},
        option_fields::OptionField,
        project::{NewProject, NewProjectImage, NewProjectLink, UpdateProject},
        skill::{NewSkill, NewSkillCategory, UpdateSkillCategory},
        user::NewUser,
    },
    errors::AppError,
    repositories::{
        certification::CertificationRepository, message::MessageRepository,
        project::ProjectRepository, skill::SkillRepository, user::UserRepository,
    },
    shared_repos::SharedRepositories,
};
use test_utils::*;

fn new_project(user_id: i32, title: &str) -> NewProject {
    NewProject {
        user_id,
        title: title.to_string(),
        short_description: "Short".to_string(),
        full_description: "Full description".to_string(),
        tech_stack: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        icon_name: Some("Code".to_string()),
    }
}

fn new_certification(user_id: i32) -> NewCertification {
    NewCertification {
        user_id,
        title: "Cloud Practitioner".to_string(),
        platform: "AWS".to_string(),
        description: "Foundational cloud certification".to_string(),
        pdf_path: Some("/attached_assets/cloud.pdf".to_string()),
        image_path: None,
        icon_name: Some("Cloud".to_string()),
        completion_date: Some("March 2024".to_string()),
        duration: Some("6 weeks".to_string()),
    }
}

fn new_message(user_id: i32) -> NewMessage {
    NewMessage {
        user_id,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message_content: "Hello there".to_string(),
    }
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn generated_ids_are_unique() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;

    let mut ids = HashSet::new();
    for i in 0..5 {
        let project = repos
            .project_repo
            .create_project(&new_project(user.id, &format!("Project {i}")))
            .await
            .unwrap();
        assert!(ids.insert(project.id), "id {} was handed out twice", project.id);
    }
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn duplicate_username_is_rejected_without_persisting() {
    let repos = test_repos().await;
    let username = unique_username("dup");

    let first = repos
        .user_repo
        .create_user(&NewUser::new(username.clone(), "first"))
        .await
        .unwrap();

    let err = repos
        .user_repo
        .create_user(&NewUser::new(username.clone(), "second"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UniquenessError(_)), "got {err:?}");

    let stored = repos.user_repo.get_user_by_username(&username).await.unwrap().unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.password, "first");
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn concurrent_registrations_of_one_username_admit_exactly_one() {
    let pool = test_pool().await;
    let repos = SharedRepositories::new(pool.clone());
    let username = unique_username("race");
    let first = NewUser::new(username.clone(), "first");
    let second = NewUser::new(username.clone(), "second");

    let (a, b) = tokio::join!(
        repos.user_repo.create_user(&first),
        repos.user_repo.create_user(&second)
    );

    let results = [a, b];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(AppError::UniquenessError(_))))
            .count(),
        1
    );

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(&username)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn user_lookups_return_none_when_missing() {
    let repos = test_repos().await;

    assert!(repos.user_repo.get_user(i32::MAX).await.unwrap().is_none());
    assert!(repos
        .user_repo
        .get_user_by_username(&unique_username("ghost"))
        .await
        .unwrap()
        .is_none());
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn invalid_input_never_reaches_the_database() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;

    let mut project = new_project(user.id, "   ");
    project.tech_stack = vec![String::new()];

    let err = repos.project_repo.create_project(&project).await.unwrap_err();
    let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["techStack", "title"]);

    assert!(repos.project_repo.get_projects(user.id).await.unwrap().is_empty());
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn projects_are_listed_per_owner_in_insertion_order() {
    let repos = test_repos().await;
    let owner = seed_user(&repos).await;
    let other = seed_user(&repos).await;

    let mut expected = Vec::new();
    for title in ["First", "Second", "Third"] {
        let project = repos.project_repo.create_project(&new_project(owner.id, title)).await.unwrap();
        expected.push(project.id);
    }
    repos.project_repo.create_project(&new_project(other.id, "Elsewhere")).await.unwrap();

    let projects = repos.project_repo.get_projects(owner.id).await.unwrap();
    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();

    assert_eq!(ids, expected);
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn update_changes_only_supplied_fields() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;
    let original = repos.project_repo.create_project(&new_project(user.id, "Before")).await.unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let patch = UpdateProject {
        title: Some("After".to_string()),
        ..Default::default()
    };
    let updated = repos
        .project_repo
        .update_project(original.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "After");
    assert_eq!(updated.short_description, original.short_description);
    assert_eq!(updated.tech_stack, original.tech_stack);
    assert_eq!(updated.icon_name, original.icon_name);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn update_can_clear_a_nullable_field() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;
    let project = repos.project_repo.create_project(&new_project(user.id, "Icon")).await.unwrap();
    assert!(project.icon_name.is_some());

    let patch = UpdateProject {
        icon_name: OptionField::SetToNull,
        ..Default::default()
    };
    let updated = repos.project_repo.update_project(project.id, &patch).await.unwrap().unwrap();

    assert_eq!(updated.icon_name, None);
    assert_eq!(updated.title, "Icon");
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn update_of_missing_row_returns_none() {
    let repos = test_repos().await;

    let patch = UpdateSkillCategory {
        category: Some("Languages".to_string()),
        ..Default::default()
    };
    assert!(repos.skill_repo.update_skill_category(i32::MAX, &patch).await.unwrap().is_none());
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn deleted_certification_is_gone() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;
    let certification = repos
        .certification_repo
        .create_certification(&new_certification(user.id))
        .await
        .unwrap();

    assert!(repos.certification_repo.delete_certification(certification.id).await.unwrap());
    assert!(repos
        .certification_repo
        .get_certification(certification.id)
        .await
        .unwrap()
        .is_none());

    // A second delete finds nothing but is not an error
    assert!(!repos.certification_repo.delete_certification(certification.id).await.unwrap());
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn certification_update_sets_and_clears_paths() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;
    let certification = repos
        .certification_repo
        .create_certification(&new_certification(user.id))
        .await
        .unwrap();

    let patch = UpdateCertification {
        pdf_path: OptionField::SetToNull,
        image_path: OptionField::SetToValue("https://cdn.example.com/badge.png".to_string()),
        ..Default::default()
    };
    let updated = repos
        .certification_repo
        .update_certification(certification.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.pdf_path, None);
    assert_eq!(updated.image_path.as_deref(), Some("https://cdn.example.com/badge.png"));
    assert_eq!(updated.completion_date.as_deref(), Some("March 2024"));
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn credentials_keep_their_type() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;
    let certification = repos
        .certification_repo
        .create_certification(&new_certification(user.id))
        .await
        .unwrap();

    let credential = repos
        .certification_repo
        .create_certification_credential(&NewCertificationCredential {
            certification_id: certification.id,
            credential_type: "Credential ID".to_string(),
            value: "ABC-123".to_string(),
        })
        .await
        .unwrap();

    let listed = repos
        .certification_repo
        .get_certification_credentials(certification.id)
        .await
        .unwrap();
    assert_eq!(listed, vec![credential.clone()]);
    assert_eq!(listed[0].credential_type, "Credential ID");
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn marking_a_message_read_is_idempotent() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;
    let message = repos.message_repo.create_message(&new_message(user.id)).await.unwrap();
    assert_eq!(message.status(), MessageStatus::Unread);

    let first = repos.message_repo.mark_message_as_read(message.id).await.unwrap().unwrap();
    let second = repos.message_repo.mark_message_as_read(message.id).await.unwrap().unwrap();

    assert!(first.is_read);
    assert!(second.is_read);
    assert_eq!(second.status(), MessageStatus::Read);
    assert!(repos.message_repo.mark_message_as_read(i32::MAX).await.unwrap().is_none());
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn unread_counter_follows_read_state() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;

    let first = repos.message_repo.create_message(&new_message(user.id)).await.unwrap();
    repos.message_repo.create_message(&new_message(user.id)).await.unwrap();
    assert_eq!(repos.message_repo.count_unread_messages(user.id).await.unwrap(), 2);

    repos.message_repo.mark_message_as_read(first.id).await.unwrap();
    assert_eq!(repos.message_repo.count_unread_messages(user.id).await.unwrap(), 1);
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn created_skill_is_listed_under_its_category() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;
    let category = repos
        .skill_repo
        .create_skill_category(&NewSkillCategory {
            user_id: user.id,
            category: "Languages".to_string(),
        })
        .await
        .unwrap();

    let skill = repos
        .skill_repo
        .create_skill(&NewSkill {
            category_id: category.id,
            name: "Rust".to_string(),
        })
        .await
        .unwrap();

    let skills = repos.skill_repo.get_skills(category.id).await.unwrap();
    assert!(skills.iter().any(|s| s.id == skill.id && s.name == "Rust"));

    let all = repos.skill_repo.get_skills_for_user(user.id).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn child_of_missing_parent_is_a_constraint_error() {
    let repos = test_repos().await;

    let err = repos
        .project_repo
        .create_project_image(&NewProjectImage {
            project_id: i32::MAX,
            image_url: "/attached_assets/shot.png".to_string(),
            alt_text: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintError(_)), "got {err:?}");

    let err = repos.message_repo.create_message(&new_message(i32::MAX)).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintError(_)), "got {err:?}");
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn parent_with_children_cannot_be_deleted() {
    let repos = test_repos().await;
    let user = seed_user(&repos).await;
    let project = repos.project_repo.create_project(&new_project(user.id, "Parent")).await.unwrap();
    let link = repos
        .project_repo
        .create_project_link(&NewProjectLink {
            project_id: project.id,
            title: "Source".to_string(),
            url: "https://github.com/example/parent".to_string(),
        })
        .await
        .unwrap();

    let err = repos.project_repo.delete_project(project.id).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintError(_)), "got {err:?}");
    assert!(repos.project_repo.get_project(project.id).await.unwrap().is_some());

    assert!(repos.project_repo.delete_project_link(link.id).await.unwrap());
    assert!(repos.project_repo.delete_project(project.id).await.unwrap());
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn missing_ids_delete_nothing() {
    let repos = test_repos().await;

    assert!(!repos.project_repo.delete_project(i32::MAX).await.unwrap());
    assert!(!repos.project_repo.delete_project_image(i32::MAX).await.unwrap());
    assert!(!repos.skill_repo.delete_skill(i32::MAX).await.unwrap());
    assert!(!repos.message_repo.delete_message(i32::MAX).await.unwrap());
}

#[actix_rt::test]
#[ignore = "needs PostgreSQL at APP_TEST_DATABASE_URL"]
async fn connection_check_succeeds() {
    let repos = test_repos().await;

    assert!(repos.user_repo.check_connection().await.is_ok());
}
