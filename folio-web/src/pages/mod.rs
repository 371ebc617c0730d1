mod about;
mod contact;
mod home;
mod not_found;
mod projects;
mod skills;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;
