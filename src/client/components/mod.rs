pub mod auth;
pub mod loading;
pub mod navbar;
pub mod page;
pub mod progress;
pub mod title;

pub use loading::Loading;
pub use navbar::Navbar;
pub use page::Page;
pub use progress::ProgressBar;
pub use title::BudgetwiseTitle;
