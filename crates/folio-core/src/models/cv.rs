use super::{Certificate, Education, Experience, PersonalInfo, Project, Skill, User, UserLanguage};
use serde::Serialize;

/// Identity block of the CV: the user plus their personal info, if any
#[derive(Debug, Clone, Serialize)]
pub struct CvBasics {
    #[serde(flatten)]
    pub user: User,
    pub personal_info: Option<PersonalInfo>,
}

/// Everything the public CV page renders for one user
#[derive(Debug, Clone, Serialize)]
pub struct Cv {
    pub basics: CvBasics,
    pub work: Vec<Experience>,
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
    pub skills: Vec<Skill>,
    pub languages: Vec<UserLanguage>,
    pub projects: Vec<Project>,
}

impl Cv {
    /// Assemble the aggregate. Work and education are sorted newest first.
    pub fn new(
        basics: CvBasics,
        mut work: Vec<Experience>,
        mut education: Vec<Education>,
        certificates: Vec<Certificate>,
        skills: Vec<Skill>,
        languages: Vec<UserLanguage>,
        projects: Vec<Project>,
    ) -> Self {
        work.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        education.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));

        Self {
            basics,
            work,
            education,
            certificates,
            skills,
            languages,
            projects,
        }
    }
}
