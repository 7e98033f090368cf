//! Shared application state

use crate::services::ImageUploadService;
use folio_core::Config;
use folio_db::{
    CertificateRepository, CvRepository, EducationRepository, ExperienceRepository,
    LanguageRepository, PersonalInfoRepository, ProjectRepository, SkillRepository,
    UserRepository,
};
use sqlx::PgPool;

pub struct AppState {
    pub config: Config,
    pub db: DatabaseState,
    pub images: ImageUploadService,
}

/// Pool plus one repository per table
#[derive(Clone)]
pub struct DatabaseState {
    pub pool: PgPool,
    pub users: UserRepository,
    pub personal_info: PersonalInfoRepository,
    pub education: EducationRepository,
    pub experience: ExperienceRepository,
    pub certificates: CertificateRepository,
    pub projects: ProjectRepository,
    pub skills: SkillRepository,
    pub languages: LanguageRepository,
    pub cv: CvRepository,
}

impl DatabaseState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            personal_info: PersonalInfoRepository::new(pool.clone()),
            education: EducationRepository::new(pool.clone()),
            experience: ExperienceRepository::new(pool.clone()),
            certificates: CertificateRepository::new(pool.clone()),
            projects: ProjectRepository::new(pool.clone()),
            skills: SkillRepository::new(pool.clone()),
            languages: LanguageRepository::new(pool.clone()),
            cv: CvRepository::new(pool.clone()),
            pool,
        }
    }
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let images = ImageUploadService::from_config(&config.image, config.uploads_enabled);
        Self {
            db: DatabaseState::new(pool),
            images,
            config,
        }
    }
}
