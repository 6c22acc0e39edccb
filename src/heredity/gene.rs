//! The `gene` module contains the heritable alleles of an individual and the
//! resolution of their dominance into an observable [`Phenotype`].

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// A `Gene` is an immutable allele passed from parent to child, that determines
/// observable attributes of the individual carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene {
    locus: String,
    variant: String,
    dominance: i32,
}

impl Gene {
    /// Creates a new `Gene`.
    ///
    /// # Parameters
    ///
    /// * `locus` - the trait category the allele belongs to; if an individual carries
    ///     multiple alleles of the same locus only the most dominant one(s) are expressed
    /// * `variant` - the specific value of the trait encoded by the allele, e.g. blue or
    ///     brown eyes
    /// * `dominance` - the dominance rank of the allele, where lower values represent
    ///     more dominant alleles and equal values represent co-dominant ones
    pub fn new<L: Into<String>, V: Into<String>>(locus: L, variant: V, dominance: i32) -> Self {
        Gene {
            locus: locus.into(),
            variant: variant.into(),
            dominance,
        }
    }

    /// Returns the locus of the `Gene`.
    pub fn locus(&self) -> &str {
        &self.locus
    }

    /// Returns the variant encoded by the `Gene`.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Returns the dominance rank of the `Gene`.
    pub fn dominance(&self) -> i32 {
        self.dominance
    }

    /// Determines which variants are expressed by the specified alleles.
    /// Genes of different loci may be mixed freely and the order of the genes
    /// does not influence the result.
    ///
    /// For each locus only the variants of the genes with the lowest dominance
    /// value are expressed. All distinct variants sharing this value are
    /// expressed together, which allows for co-dominance.
    ///
    /// # Parameters
    ///
    /// * `genes` - the alleles to resolve
    pub fn get_expressions<'a, I>(genes: I) -> Phenotype
    where
        I: IntoIterator<Item = &'a Gene>,
    {
        let dominant: HashMap<&str, (i32, HashSet<&str>)> =
            genes.into_iter().fold(HashMap::new(), |mut dominant, gene| {
                match dominant.entry(gene.locus()) {
                    Entry::Vacant(entry) => {
                        entry.insert((gene.dominance, HashSet::from([gene.variant()])));
                    },
                    Entry::Occupied(mut entry) => {
                        let (dominance, variants) = entry.get_mut();
                        match gene.dominance.cmp(dominance) {
                            Ordering::Less => {
                                *dominance = gene.dominance;
                                *variants = HashSet::from([gene.variant()]);
                            },
                            Ordering::Equal => {
                                variants.insert(gene.variant());
                            },
                            // Masked by a more dominant allele.
                            Ordering::Greater => {},
                        }
                    },
                }
                dominant
            });
        Phenotype {
            expressions: dominant
                .into_iter()
                .map(|(locus, (_, variants))| {
                    (
                        locus.to_string(),
                        variants.into_iter().map(String::from).collect(),
                    )
                })
                .collect(),
        }
    }
}

/// A `Phenotype` contains the expressed variants of an individual per locus.
/// Multiple variants are expressed at the same locus in case of co-dominance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Phenotype {
    expressions: HashMap<String, HashSet<String>>,
}

impl Phenotype {
    /// Creates an empty `Phenotype`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variants expressed at the specified locus or `None`
    /// if the locus is not expressed at all.
    ///
    /// # Parameters
    ///
    /// * `locus` - the locus to look up
    pub fn expressions(&self, locus: &str) -> Option<&HashSet<String>> {
        self.expressions.get(locus)
    }

    /// Returns `true` if the specified variant is among the variants
    /// expressed at the specified locus.
    ///
    /// # Parameters
    ///
    /// * `locus` - the locus to look up
    /// * `variant` - the variant to check for
    pub fn expresses(&self, locus: &str, variant: &str) -> bool {
        self.expressions
            .get(locus)
            .map_or(false, |variants| variants.contains(variant))
    }

    /// Returns all expressed loci.
    pub fn loci(&self) -> impl Iterator<Item = &str> {
        self.expressions.keys().map(String::as_str)
    }

    /// Returns the number of expressed loci.
    pub fn number_of_loci(&self) -> usize {
        self.expressions.len()
    }

    /// Returns `true` if no locus is expressed.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl<L, V, I> FromIterator<(L, I)> for Phenotype
where
    L: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = V>,
{
    fn from_iter<T: IntoIterator<Item = (L, I)>>(iter: T) -> Self {
        let mut expressions: HashMap<String, HashSet<String>> = HashMap::new();
        for (locus, variants) in iter {
            let variants: HashSet<String> = variants.into_iter().map(Into::into).collect();
            // A locus is only expressed with at least one variant.
            if !variants.is_empty() {
                expressions.entry(locus.into()).or_default().extend(variants);
            }
        }
        Phenotype { expressions }
    }
}

#[cfg(test)]
mod tests;
