pub mod profile;
pub mod section;

pub use profile::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo,
    Proficiency, Profile, ProjectEntry, Skills,
};
pub use section::{Section, SkillCategory};
