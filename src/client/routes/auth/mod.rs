pub mod admin;
pub mod budgets;
pub mod dashboard;
pub mod forum;
pub mod goals;
pub mod profile;
pub mod transactions;

pub use admin::Admin;
pub use budgets::Budgets;
pub use dashboard::Dashboard;
pub use forum::Forum;
pub use goals::Goals;
pub use profile::Profile;
pub use transactions::Transactions;
