mod model;
mod routes;

pub use model::ReadinessReport;
pub use routes::routes;
