pub mod catalog;
pub mod favorites;
pub mod handlers;
pub mod middleware;
pub mod movies;
pub mod preferences;
pub mod routes;

pub use routes::create_router;
