mod contact;
pub use contact::Contact;

mod experience;
pub use experience::Experience;

mod home;
pub use home::Home;

mod not_found;
pub use not_found::NotFound;

mod projects;
pub use projects::Projects;

mod skills;
pub use skills::Skills;
