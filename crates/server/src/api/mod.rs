pub mod handlers;
pub mod ingredients;
pub mod recipes;
pub mod routes;
pub mod uoms;

pub use routes::create_router;
