mod feature;
mod io;
mod layer;
mod load;

pub use feature::{LatLng, PointFeature};
pub use io::LABEL_KEYS;
pub(crate) use io::point_feature_json;
pub use layer::Layer;
pub use load::{load, load_from};
