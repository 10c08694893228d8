pub mod health;
pub mod preview;
pub mod routes;

pub use routes::create_routes;
