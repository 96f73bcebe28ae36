//! # Storage Repository
//!
//! Data access for the `users` table:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! MySqlUserRepository           (five parameterized statements)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySqlPool                     (owned by sqlx)
//!   ↓
//! MySQL
//! ```
//!
//! The repository keeps no state of its own; pooling, I/O and
//! cancellation belong to sqlx.

pub mod di;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use di::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
