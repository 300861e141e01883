mod layout;
pub use layout::AppLayout;

mod protected;
pub use protected::Protected;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod activities;
pub use activities::Activities;

mod account;
pub use account::Account;

mod post;
pub use post::PostPage;

mod user_page;
pub use user_page::UserPage;

mod not_found;
pub use not_found::NotFound;
