use super::{
    CertificateRepository, EducationRepository, ExperienceRepository, LanguageRepository,
    PersonalInfoRepository, ProjectRepository, SkillRepository, UserRepository,
};
use folio_core::{
    models::{Cv, CvBasics},
    AppError,
};
use sqlx::PgPool;

/// Read-side aggregate over all CV tables
#[derive(Clone)]
pub struct CvRepository {
    users: UserRepository,
    personal_info: PersonalInfoRepository,
    experience: ExperienceRepository,
    education: EducationRepository,
    certificates: CertificateRepository,
    skills: SkillRepository,
    languages: LanguageRepository,
    projects: ProjectRepository,
}

impl CvRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            personal_info: PersonalInfoRepository::new(pool.clone()),
            experience: ExperienceRepository::new(pool.clone()),
            education: EducationRepository::new(pool.clone()),
            certificates: CertificateRepository::new(pool.clone()),
            skills: SkillRepository::new(pool.clone()),
            languages: LanguageRepository::new(pool.clone()),
            projects: ProjectRepository::new(pool),
        }
    }

    /// Load the whole CV of a user, `None` if the user does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_cv(&self, user_id: i32) -> Result<Option<Cv>, AppError> {
        let Some(user) = self.users.get_user(user_id).await? else {
            return Ok(None);
        };

        let basics = CvBasics {
            user,
            personal_info: self.personal_info.get_for_user(user_id).await?,
        };

        Ok(Some(Cv::new(
            basics,
            self.experience.list_for_user(user_id).await?,
            self.education.list_for_user(user_id).await?,
            self.certificates.list_for_user(user_id).await?,
            self.skills.list_for_user(user_id).await?,
            self.languages.list_for_user(user_id).await?,
            self.projects.list_for_user(user_id).await?,
        )))
    }
}
