//! One repository struct per table. All methods are associated functions
//! taking the pool, so repositories carry no state of their own.

pub mod expense_repo;
pub mod review_repo;
pub mod spot_repo;
pub mod token_repo;
pub mod user_repo;

pub use expense_repo::ExpenseRepo;
pub use review_repo::ReviewRepo;
pub use spot_repo::SpotRepo;
pub use token_repo::TokenRepo;
pub use user_repo::UserRepo;
