//! Database repositories for the data access layer
//!
//! One repository per table. Child records (education, experience, ...) are
//! always addressed by `(user_id, id)` so a user can only touch their own rows.
//! Updates return `Option<T>` and deletes return `bool`; the caller decides
//! what a missing row means.

pub mod certificate;
pub mod cv;
pub mod education;
pub mod experience;
pub mod language;
pub mod personal_info;
pub mod project;
pub mod skill;
pub mod user;

pub use certificate::CertificateRepository;
pub use cv::CvRepository;
pub use education::EducationRepository;
pub use experience::ExperienceRepository;
pub use language::LanguageRepository;
pub use personal_info::PersonalInfoRepository;
pub use project::ProjectRepository;
pub use skill::SkillRepository;
pub use user::UserRepository;
