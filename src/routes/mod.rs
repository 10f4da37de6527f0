pub mod evaluation_policies;

pub mod evaluation_systems;

pub mod evaluation_items;

pub mod subjects;

pub mod courses;

pub use courses::configure_courses_routes;
pub use evaluation_items::configure_evaluation_items_routes;
pub use evaluation_policies::configure_evaluation_policies_routes;
pub use evaluation_systems::configure_evaluation_systems_routes;
pub use subjects::configure_subjects_routes;
