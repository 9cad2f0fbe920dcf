pub mod projection;
pub mod types;

pub use projection::{centroids, excerpt, project_point, project_points, sign_centroid};
pub use types::{Centroid, LayoutPoint};
