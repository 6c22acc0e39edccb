//! The `pool` module contains the universe of alleles available per locus,
//! from which [`FitnessTemplate`]s draw their requirements.
//!
//! [`FitnessTemplate`]: super::fitness::FitnessTemplate

use super::error::{HeredityError, Result};
use super::gene::Gene;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `GenePool` maps each locus to the ordered candidate [`Gene`]s available at it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenePool {
    loci: BTreeMap<String, Vec<Gene>>,
}

impl GenePool {
    /// Creates an empty `GenePool`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a random `GenePool` with loci named `GENE{i}` and variants named
    /// `G{i}V{j}`.
    ///
    /// # Parameters
    ///
    /// * `number_of_loci` - the number of loci in the pool
    /// * `min_variants` - the minimum number of variants per locus
    /// * `max_variants` - the maximum number of variants per locus
    ///
    /// # Panics
    ///
    /// If `min_variants` is zero or greater than `max_variants`.
    pub fn random(number_of_loci: usize, min_variants: usize, max_variants: usize) -> Self {
        Self::random_with_rng(number_of_loci, min_variants, max_variants, &mut thread_rng())
    }

    /// Creates a random `GenePool` like [`GenePool::random`] using the supplied random source.
    ///
    /// # Parameters
    ///
    /// * `number_of_loci` - the number of loci in the pool
    /// * `min_variants` - the minimum number of variants per locus
    /// * `max_variants` - the maximum number of variants per locus
    /// * `rng` - the random source
    ///
    /// # Panics
    ///
    /// If `min_variants` is zero or greater than `max_variants`.
    pub fn random_with_rng<R: Rng + ?Sized>(
        number_of_loci: usize,
        min_variants: usize,
        max_variants: usize,
        rng: &mut R,
    ) -> Self {
        assert!(min_variants > 0, "Every locus requires at least one variant.");
        assert!(
            min_variants <= max_variants,
            "The minimum of {} variants exceeds the maximum of {} variants.",
            min_variants,
            max_variants
        );
        let mut pool = GenePool::new();
        for i in 0..number_of_loci {
            let number_of_variants = rng.gen_range(min_variants..=max_variants);
            for j in 0..number_of_variants {
                let dominance = rng.gen_range(0..=max_dominance(max_variants));
                pool.insert(Gene::new(
                    format!("GENE{}", i),
                    format!("G{}V{}", i, j),
                    dominance,
                ));
            }
        }
        pool
    }

    /// Adds a candidate [`Gene`] to the locus it belongs to.
    ///
    /// # Parameters
    ///
    /// * `gene` - the candidate to add
    pub fn insert(&mut self, gene: Gene) {
        self.loci
            .entry(gene.locus().to_string())
            .or_default()
            .push(gene);
    }

    /// Returns the candidate [`Gene`]s of the specified locus.
    ///
    /// # Parameters
    ///
    /// * `locus` - the locus to look up
    pub fn candidates(&self, locus: &str) -> Option<&[Gene]> {
        self.loci.get(locus).map(Vec::as_slice)
    }

    /// Returns all loci of the pool in ascending order.
    pub fn loci(&self) -> impl Iterator<Item = &str> {
        self.loci.keys().map(String::as_str)
    }

    /// Returns the number of distinct loci in the pool.
    pub fn number_of_loci(&self) -> usize {
        self.loci.len()
    }

    /// Returns `true` if the pool does not contain any locus.
    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    /// Checks that the pool contains at least one locus and that every locus
    /// offers at least one candidate.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(HeredityError::EmptyGenePool);
        }
        match self.loci.iter().find(|(_, genes)| genes.is_empty()) {
            Some((locus, _)) => Err(HeredityError::EmptyLocus(locus.clone())),
            None => Ok(()),
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[Gene])> {
        self.loci
            .iter()
            .map(|(locus, genes)| (locus.as_str(), genes.as_slice()))
    }
}

/// Returns the highest dominance rank assigned to random genes, saturating at `i32::MAX`.
///
/// # Parameters
///
/// * `max_variants` - the maximum number of variants per locus
fn max_dominance(max_variants: usize) -> i32 {
    i32::try_from(max_variants).unwrap_or(i32::MAX)
}

impl FromIterator<Gene> for GenePool {
    fn from_iter<T: IntoIterator<Item = Gene>>(iter: T) -> Self {
        let mut pool = GenePool::new();
        for gene in iter {
            pool.insert(gene);
        }
        pool
    }
}

impl From<BTreeMap<String, Vec<Gene>>> for GenePool {
    fn from(loci: BTreeMap<String, Vec<Gene>>) -> Self {
        GenePool { loci }
    }
}
