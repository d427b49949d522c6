//! Employee CRUD REST demo service over the `EMP` table.
//!
//! A thin actix-web dispatcher over a sqlx service layer that issues five
//! fixed parameterized statements against Postgres. The binary wires the
//! pool and the routes; everything else lives here so the integration tests
//! can build the same app.

pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;

pub use errors::AppError;
pub use models::employee::Employee;
pub use service::EmployeeService;
