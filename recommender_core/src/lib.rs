mod catalog;
mod config;
mod data;
mod error;
pub mod optimization;
mod recommender;
mod similarity;
mod stats;
mod svd;
pub mod text;

pub use catalog::{Catalog, Subject};
pub use config::{RecommenderConfig, SvdConfig};
pub use data::{Dataset, Rating, make_rng};
pub use error::{RecError, Result};
pub use recommender::Recommender;
pub use similarity::{ContentEngine, cosine, similarity_matrix};
pub use stats::FitReport;
pub use svd::{Prediction, SvdModel};
