//! The `configuration` module contains the parameter sets for the random creation
//! of [`FitnessTemplate`]s.

use super::error::{HeredityError, Result};
use super::fitness::{check_bounds, FitnessTemplate};
use super::pool::GenePool;
use derive_builder::Builder;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

#[derive(Builder, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[builder(default, build_fn(validate = "Self::validate", error = "HeredityError"))]
/// This struct provides configurable bounds for random [`FitnessTemplate`]s.
pub struct TemplateParameters {
    /// The minimum number of required variants per template.
    min_constraints: usize,
    /// The maximum number of required variants per template.
    max_constraints: usize,
    /// The lower inclusive bound of the score value.
    min_score: f64,
    /// The upper inclusive bound of the score value.
    max_score: f64,
}

impl TemplateParameters {
    pub fn min_constraints(&self) -> usize {
        self.min_constraints
    }

    pub fn max_constraints(&self) -> usize {
        self.max_constraints
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    /// Checks the bounds of the parameters. Parameters created by a
    /// [`TemplateParametersBuilder`] are always valid, deserialised ones might not be.
    pub fn validate(&self) -> Result<()> {
        check_bounds(
            self.min_constraints,
            self.max_constraints,
            self.min_score,
            self.max_score,
        )
    }

    /// Creates a random [`FitnessTemplate`] within the bounds of the parameters.
    ///
    /// # Parameters
    ///
    /// * `gene_pool` - the pool to draw requirements from
    pub fn generate(&self, gene_pool: &GenePool) -> Result<FitnessTemplate> {
        self.generate_with_rng(gene_pool, &mut thread_rng())
    }

    /// Creates a random [`FitnessTemplate`] within the bounds of the parameters using
    /// the supplied random source.
    ///
    /// # Parameters
    ///
    /// * `gene_pool` - the pool to draw requirements from
    /// * `rng` - the random source
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        gene_pool: &GenePool,
        rng: &mut R,
    ) -> Result<FitnessTemplate> {
        FitnessTemplate::try_create_random_with_rng(
            self.min_constraints,
            self.max_constraints,
            self.min_score,
            self.max_score,
            gene_pool,
            rng,
        )
    }

    /// Creates the specified number of independent random [`FitnessTemplate`]s within
    /// the bounds of the parameters.
    ///
    /// # Parameters
    ///
    /// * `count` - the number of templates
    /// * `gene_pool` - the pool to draw requirements from
    pub fn generate_set(&self, count: usize, gene_pool: &GenePool) -> Result<Vec<FitnessTemplate>> {
        self.generate_set_with_rng(count, gene_pool, &mut thread_rng())
    }

    /// Creates the specified number of independent random [`FitnessTemplate`]s within
    /// the bounds of the parameters using the supplied random source.
    ///
    /// # Parameters
    ///
    /// * `count` - the number of templates
    /// * `gene_pool` - the pool to draw requirements from
    /// * `rng` - the random source
    pub fn generate_set_with_rng<R: Rng + ?Sized>(
        &self,
        count: usize,
        gene_pool: &GenePool,
        rng: &mut R,
    ) -> Result<Vec<FitnessTemplate>> {
        self.validate()?;
        gene_pool.validate()?;
        Ok(FitnessTemplate::create_random_set_with_rng(
            count,
            self.min_constraints,
            self.max_constraints,
            self.min_score,
            self.max_score,
            gene_pool,
            rng,
        ))
    }
}

impl Default for TemplateParameters {
    fn default() -> Self {
        TemplateParameters {
            min_constraints: 1,
            max_constraints: 5,
            min_score: -2.0,
            max_score: 2.0,
        }
    }
}

impl TemplateParametersBuilder {
    fn validate(&self) -> Result<()> {
        let defaults = TemplateParameters::default();
        check_bounds(
            self.min_constraints.unwrap_or(defaults.min_constraints),
            self.max_constraints.unwrap_or(defaults.max_constraints),
            self.min_score.unwrap_or(defaults.min_score),
            self.max_score.unwrap_or(defaults.max_score),
        )
    }
}
