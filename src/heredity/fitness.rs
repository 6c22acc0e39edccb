//! The `fitness` module contains the [`FitnessTemplate`]s, which express selection
//! pressures as sets of required variants a [`Phenotype`] has to exhibit.

use super::error::{HeredityError, Result};
use super::gene::Phenotype;
use super::pool::GenePool;
use log::{debug, trace};
use rand::{prelude::SliceRandom, thread_rng, Rng};
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A `FitnessTemplate` requires a single variant to be expressed at each of its loci.
/// Satisfying all of these requirements changes the fitness of an individual by the
/// score value of the template.
///
/// The requirements are single variants while a [`Phenotype`] may express multiple
/// co-dominant variants per locus. A requirement is satisfied as soon as its variant
/// is one of the expressed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessTemplate {
    required_expressions: HashMap<String, String>,
    score_value: f64,
}

impl FitnessTemplate {
    /// Creates a new `FitnessTemplate` from explicit requirements.
    ///
    /// # Parameters
    ///
    /// * `required_expressions` - the required variant per locus
    /// * `score_value` - the fitness change associated with satisfying all requirements
    pub fn new<I, L, V>(required_expressions: I, score_value: f64) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        FitnessTemplate {
            required_expressions: required_expressions
                .into_iter()
                .map(|(locus, variant)| (locus.into(), variant.into()))
                .collect(),
            score_value,
        }
    }

    /// Returns the required variant per locus.
    pub fn required_expressions(&self) -> &HashMap<String, String> {
        &self.required_expressions
    }

    /// Returns the fitness change associated with satisfying all requirements.
    pub fn score_value(&self) -> f64 {
        self.score_value
    }

    /// Returns the number of loci with a required variant.
    pub fn number_of_constraints(&self) -> usize {
        self.required_expressions.len()
    }

    /// Creates a random `FitnessTemplate` drawing its requirements from the specified
    /// [`GenePool`].
    ///
    /// The number of requirements is drawn uniformly from the inclusive constraint
    /// range, but never exceeds the number of loci in the pool. In that case every
    /// locus of the pool is required exactly once. The required loci are drawn
    /// uniformly without replacement and the required variant of each locus is drawn
    /// uniformly from the candidates of the locus. The score is drawn uniformly from
    /// the inclusive score range.
    ///
    /// # Parameters
    ///
    /// * `min_constraints` - the minimum number of requirements
    /// * `max_constraints` - the maximum number of requirements
    /// * `min_score` - the minimum score value
    /// * `max_score` - the maximum score value
    /// * `gene_pool` - the pool to draw requirements from
    ///
    /// # Panics
    ///
    /// If `min_constraints` is zero or exceeds `max_constraints`, if the score range is
    /// not a finite range with `min_score <= max_score` or if the pool is empty or
    /// contains a locus without candidates.
    pub fn create_random(
        min_constraints: usize,
        max_constraints: usize,
        min_score: f64,
        max_score: f64,
        gene_pool: &GenePool,
    ) -> Self {
        Self::create_random_with_rng(
            min_constraints,
            max_constraints,
            min_score,
            max_score,
            gene_pool,
            &mut thread_rng(),
        )
    }

    /// Creates a random `FitnessTemplate` like [`FitnessTemplate::create_random`] using
    /// the supplied random source.
    ///
    /// # Parameters
    ///
    /// * `min_constraints` - the minimum number of requirements
    /// * `max_constraints` - the maximum number of requirements
    /// * `min_score` - the minimum score value
    /// * `max_score` - the maximum score value
    /// * `gene_pool` - the pool to draw requirements from
    /// * `rng` - the random source
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`FitnessTemplate::create_random`].
    pub fn create_random_with_rng<R: Rng + ?Sized>(
        min_constraints: usize,
        max_constraints: usize,
        min_score: f64,
        max_score: f64,
        gene_pool: &GenePool,
        rng: &mut R,
    ) -> Self {
        Self::try_create_random_with_rng(
            min_constraints,
            max_constraints,
            min_score,
            max_score,
            gene_pool,
            rng,
        )
        .unwrap_or_else(|error| panic!("Creating a random fitness template failed: {}", error))
    }

    /// Creates a random `FitnessTemplate` like [`FitnessTemplate::create_random_with_rng`],
    /// but returns an error instead of panicking on invalid parameters.
    ///
    /// # Parameters
    ///
    /// * `min_constraints` - the minimum number of requirements
    /// * `max_constraints` - the maximum number of requirements
    /// * `min_score` - the minimum score value
    /// * `max_score` - the maximum score value
    /// * `gene_pool` - the pool to draw requirements from
    /// * `rng` - the random source
    pub fn try_create_random_with_rng<R: Rng + ?Sized>(
        min_constraints: usize,
        max_constraints: usize,
        min_score: f64,
        max_score: f64,
        gene_pool: &GenePool,
        rng: &mut R,
    ) -> Result<Self> {
        check_bounds(min_constraints, max_constraints, min_score, max_score)?;
        gene_pool.validate()?;
        let number_of_constraints = rng
            .gen_range(min_constraints..=max_constraints)
            .min(gene_pool.number_of_loci());
        let mut loci: Vec<_> = gene_pool.iter().collect();
        let (selected, _) = loci.partial_shuffle(rng, number_of_constraints);
        let required_expressions = selected
            .iter()
            .map(|(locus, candidates)| {
                candidates
                    .choose(rng)
                    .map(|gene| (locus.to_string(), gene.variant().to_string()))
                    .ok_or_else(|| HeredityError::EmptyLocus(locus.to_string()))
            })
            .collect::<Result<HashMap<String, String>>>()?;
        let score_value = sample_score(min_score, max_score, rng);
        trace!(
            "Created fitness template with {} constraints and score {}.",
            required_expressions.len(),
            score_value
        );
        Ok(FitnessTemplate {
            required_expressions,
            score_value,
        })
    }

    /// Creates the specified number of independent random `FitnessTemplate`s as
    /// described by [`FitnessTemplate::create_random`]. Templates with equal content
    /// are not filtered.
    ///
    /// # Parameters
    ///
    /// * `count` - the number of templates
    /// * `min_constraints` - the minimum number of requirements
    /// * `max_constraints` - the maximum number of requirements
    /// * `min_score` - the minimum score value
    /// * `max_score` - the maximum score value
    /// * `gene_pool` - the pool to draw requirements from
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`FitnessTemplate::create_random`].
    pub fn create_random_set(
        count: usize,
        min_constraints: usize,
        max_constraints: usize,
        min_score: f64,
        max_score: f64,
        gene_pool: &GenePool,
    ) -> Vec<Self> {
        Self::create_random_set_with_rng(
            count,
            min_constraints,
            max_constraints,
            min_score,
            max_score,
            gene_pool,
            &mut thread_rng(),
        )
    }

    /// Creates random `FitnessTemplate`s like [`FitnessTemplate::create_random_set`]
    /// using the supplied random source.
    ///
    /// # Parameters
    ///
    /// * `count` - the number of templates
    /// * `min_constraints` - the minimum number of requirements
    /// * `max_constraints` - the maximum number of requirements
    /// * `min_score` - the minimum score value
    /// * `max_score` - the maximum score value
    /// * `gene_pool` - the pool to draw requirements from
    /// * `rng` - the random source
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`FitnessTemplate::create_random`].
    pub fn create_random_set_with_rng<R: Rng + ?Sized>(
        count: usize,
        min_constraints: usize,
        max_constraints: usize,
        min_score: f64,
        max_score: f64,
        gene_pool: &GenePool,
        rng: &mut R,
    ) -> Vec<Self> {
        debug!(
            "Creating {} fitness templates with {}..={} constraints from {} loci.",
            count,
            min_constraints,
            max_constraints,
            gene_pool.number_of_loci()
        );
        (0..count)
            .map(|_| {
                Self::create_random_with_rng(
                    min_constraints,
                    max_constraints,
                    min_score,
                    max_score,
                    gene_pool,
                    rng,
                )
            })
            .collect()
    }

    /// Returns `true` if the [`Phenotype`] expresses every required variant at its
    /// locus. Loci of the [`Phenotype`] without requirement are ignored, so a template
    /// without any requirement matches every [`Phenotype`].
    ///
    /// # Parameters
    ///
    /// * `phenotype` - the [`Phenotype`] to check
    pub fn matches(&self, phenotype: &Phenotype) -> bool {
        self.required_expressions
            .iter()
            .all(|(locus, variant)| phenotype.expresses(locus, variant))
    }

    /// Returns the summed score values of all templates matching the [`Phenotype`].
    ///
    /// # Parameters
    ///
    /// * `templates` - the templates to evaluate
    /// * `phenotype` - the [`Phenotype`] to score
    pub fn fitness_score<'a, I>(templates: I, phenotype: &Phenotype) -> f64
    where
        I: IntoIterator<Item = &'a FitnessTemplate>,
    {
        templates
            .into_iter()
            .filter(|template| template.matches(phenotype))
            .map(FitnessTemplate::score_value)
            .sum()
    }

    /// Scores all [`Phenotype`]s in parallel as described by
    /// [`FitnessTemplate::fitness_score`] and returns the scores in the order of the
    /// [`Phenotype`]s.
    ///
    /// # Parameters
    ///
    /// * `templates` - the templates to evaluate
    /// * `phenotypes` - the [`Phenotype`]s to score
    pub fn score_phenotypes(templates: &[FitnessTemplate], phenotypes: &[Phenotype]) -> Vec<f64> {
        debug!(
            "Scoring {} phenotypes against {} fitness templates.",
            phenotypes.len(),
            templates.len()
        );
        phenotypes
            .par_iter()
            .map(|phenotype| Self::fitness_score(templates, phenotype))
            .collect()
    }
}

/// Draws a uniformly distributed score from the inclusive range.
fn sample_score<R: Rng + ?Sized>(min_score: f64, max_score: f64, rng: &mut R) -> f64 {
    if min_score.abs().max(max_score.abs()) <= f64::MAX / 4.0 {
        Uniform::new_inclusive(min_score, max_score).sample(rng)
    } else {
        // `Uniform` overflows close to the limits of `f64`, so interpolate between the bounds.
        let weight: f64 = Uniform::new_inclusive(0.0, 1.0).sample(rng);
        (min_score * (1.0 - weight) + max_score * weight).clamp(min_score, max_score)
    }
}

/// Checks the constraint and score ranges used to create random [`FitnessTemplate`]s.
pub(crate) fn check_bounds(
    min_constraints: usize,
    max_constraints: usize,
    min_score: f64,
    max_score: f64,
) -> Result<()> {
    if min_constraints == 0 {
        Err(HeredityError::ZeroConstraints)
    } else if min_constraints > max_constraints {
        Err(HeredityError::InvalidConstraintRange {
            min: min_constraints,
            max: max_constraints,
        })
    } else if !(min_score.is_finite() && max_score.is_finite() && min_score <= max_score) {
        Err(HeredityError::InvalidScoreRange {
            min: min_score,
            max: max_score,
        })
    } else {
        Ok(())
    }
}
