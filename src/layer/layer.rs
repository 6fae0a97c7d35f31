use super::PointFeature;

/// A named set of point markers, in source document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    pub name: String,
    pub features: Vec<PointFeature>,
}

impl Layer {
    /// An empty layer; also what a failed load yields.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), features: Vec::new() }
    }

    pub fn with_features(name: impl Into<String>, features: Vec<PointFeature>) -> Self {
        Self { name: name.into(), features }
    }

    pub fn len(&self) -> usize { self.features.len() }

    pub fn is_empty(&self) -> bool { self.features.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &PointFeature> { self.features.iter() }
}
