//! The `heredity` module contains the allele model of the simulation and the
//! fitness templates used to express selection pressures.

pub mod configuration;
pub mod error;
pub mod fitness;
pub mod gene;
pub mod pool;

pub use configuration::{TemplateParameters, TemplateParametersBuilder};
pub use error::{HeredityError, Result};
pub use fitness::FitnessTemplate;
pub use gene::{Gene, Phenotype};
pub use pool::GenePool;
