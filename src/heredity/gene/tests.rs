use super::*;
use rand::{prelude::SliceRandom, thread_rng};

fn variants(values: &[&str]) -> HashSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
/// Tests if the function `new` of the `Gene` struct stores all values.
fn test_new() {
    let gene = Gene::new("EYES", "BLUE", 3);
    assert_eq!(gene.locus(), "EYES");
    assert_eq!(gene.variant(), "BLUE");
    assert_eq!(gene.dominance(), 3);
}

#[test]
/// Tests if the function `get_expressions` returns an empty `Phenotype` for no genes.
fn test_get_expressions_empty() {
    let phenotype = Gene::get_expressions(&Vec::new());
    assert!(phenotype.is_empty());
    assert_eq!(phenotype.number_of_loci(), 0);
}

#[test]
/// Tests if the function `get_expressions` expresses the single allele of a locus.
fn test_get_expressions_single() {
    let genes = vec![Gene::new("GENE1", "G1V1", 2)];
    let phenotype = Gene::get_expressions(&genes);
    assert_eq!(phenotype.number_of_loci(), 1);
    assert_eq!(phenotype.expressions("GENE1"), Some(&variants(&["G1V1"])));
}

#[test]
/// Tests if the function `get_expressions` only expresses the most dominant allele
/// regardless of its position.
fn test_get_expressions_dominant() {
    {
        // Most dominant allele first.
        let genes = vec![
            Gene::new("GENE1", "G1V1", 1),
            Gene::new("GENE1", "G1V2", 2),
            Gene::new("GENE1", "G1V3", 5),
        ];
        let phenotype = Gene::get_expressions(&genes);
        assert_eq!(phenotype.expressions("GENE1"), Some(&variants(&["G1V1"])));
    }
    {
        // Most dominant allele last.
        let genes = vec![
            Gene::new("GENE1", "G1V3", 5),
            Gene::new("GENE1", "G1V2", 2),
            Gene::new("GENE1", "G1V1", 1),
        ];
        let phenotype = Gene::get_expressions(&genes);
        assert_eq!(phenotype.expressions("GENE1"), Some(&variants(&["G1V1"])));
    }
    {
        // Negative dominance ranks are more dominant than positive ones.
        let genes = vec![Gene::new("GENE1", "G1V1", 0), Gene::new("GENE1", "G1V2", -4)];
        let phenotype = Gene::get_expressions(&genes);
        assert_eq!(phenotype.expressions("GENE1"), Some(&variants(&["G1V2"])));
    }
}

#[test]
/// Tests if the function `get_expressions` expresses all distinct co-dominant alleles
/// and none of the masked ones.
fn test_get_expressions_co_dominance() {
    let genes = vec![
        Gene::new("FUR", "BLACK", 2),
        Gene::new("FUR", "WHITE", 3),
        Gene::new("FUR", "ORANGE", 2),
        Gene::new("FUR", "BLACK", 2),
        Gene::new("FUR", "GREY", 4),
    ];
    let phenotype = Gene::get_expressions(&genes);
    let fur = phenotype.expressions("FUR").unwrap();
    assert_eq!(fur, &variants(&["BLACK", "ORANGE"]));
    assert_eq!(fur.len(), 2);
    assert!(!phenotype.expresses("FUR", "WHITE"));
    assert!(!phenotype.expresses("FUR", "GREY"));
}

#[test]
/// Tests if the function `get_expressions` discards co-dominant alleles once a more
/// dominant allele is encountered.
fn test_get_expressions_reset() {
    let genes = vec![
        Gene::new("GENE1", "G1V1", 3),
        Gene::new("GENE1", "G1V2", 3),
        Gene::new("GENE1", "G1V3", 1),
        Gene::new("GENE1", "G1V4", 3),
    ];
    let phenotype = Gene::get_expressions(&genes);
    assert_eq!(phenotype.expressions("GENE1"), Some(&variants(&["G1V3"])));
}

#[test]
/// Tests if the function `get_expressions` resolves different loci independently.
fn test_get_expressions_multiple_loci() {
    let genes = vec![
        Gene::new("GENE1", "G1V1", 1),
        Gene::new("GENE2", "G2V1", 4),
        Gene::new("GENE1", "G1V2", 0),
        Gene::new("GENE3", "G3V1", 2),
        Gene::new("GENE2", "G2V2", 4),
    ];
    let phenotype = Gene::get_expressions(&genes);
    assert_eq!(phenotype.number_of_loci(), 3);
    assert_eq!(phenotype.expressions("GENE1"), Some(&variants(&["G1V2"])));
    assert_eq!(phenotype.expressions("GENE2"), Some(&variants(&["G2V1", "G2V2"])));
    assert_eq!(phenotype.expressions("GENE3"), Some(&variants(&["G3V1"])));
    assert_eq!(phenotype.expressions("GENE4"), None);
    let mut loci: Vec<&str> = phenotype.loci().collect();
    loci.sort_unstable();
    assert_eq!(loci, vec!["GENE1", "GENE2", "GENE3"]);
}

#[test]
/// Tests if the function `get_expressions` is independent of the order of the genes.
fn test_get_expressions_order_invariance() {
    let mut genes = Vec::new();
    for locus in 0..10 {
        for variant in 0..8 {
            genes.push(Gene::new(
                format!("GENE{}", locus),
                format!("G{}V{}", locus, variant),
                (variant * locus) % 3,
            ));
        }
    }
    // Duplicates must not change the result either.
    genes.push(genes[0].clone());
    genes.push(genes[13].clone());
    let expected = Gene::get_expressions(&genes);
    for _ in 0..100 {
        genes.shuffle(&mut thread_rng());
        assert_eq!(Gene::get_expressions(&genes), expected);
        assert_eq!(Gene::get_expressions(genes.iter().rev()), expected);
    }
}

#[test]
/// Tests if the function `expresses` of the `Phenotype` struct checks set membership.
fn test_expresses() {
    let phenotype: Phenotype = vec![
        ("GENE1", vec!["G1V1", "G1V2"]),
        ("GENE2", vec!["G2V1"]),
    ]
    .into_iter()
    .collect();
    assert!(phenotype.expresses("GENE1", "G1V1"));
    assert!(phenotype.expresses("GENE1", "G1V2"));
    assert!(phenotype.expresses("GENE2", "G2V1"));
    assert!(!phenotype.expresses("GENE2", "G2V2"));
    assert!(!phenotype.expresses("GENE3", "G1V1"));
}

#[test]
/// Tests if collecting a `Phenotype` merges repeated loci and duplicate variants.
fn test_from_iter() {
    let phenotype: Phenotype = vec![
        ("GENE1", vec!["G1V1"]),
        ("GENE1", vec!["G1V2", "G1V1"]),
    ]
    .into_iter()
    .collect();
    assert_eq!(phenotype.number_of_loci(), 1);
    assert_eq!(phenotype.expressions("GENE1"), Some(&variants(&["G1V1", "G1V2"])));
    assert_eq!(Phenotype::new(), Gene::get_expressions(&Vec::new()));
}

#[test]
/// Tests if collecting a `Phenotype` skips loci without any expressed variant.
fn test_from_iter_without_variants() {
    let phenotype: Phenotype = vec![("GENE1", Vec::<&str>::new())].into_iter().collect();
    assert!(phenotype.is_empty());
    assert_eq!(phenotype.number_of_loci(), 0);
    assert_eq!(phenotype.expressions("GENE1"), None);
    {
        // Empty entries do not hide variants of the same locus.
        let phenotype: Phenotype = vec![
            ("GENE1", vec![]),
            ("GENE2", vec!["G2V1"]),
            ("GENE1", vec!["G1V1"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(phenotype.number_of_loci(), 2);
        assert_eq!(phenotype.expressions("GENE1"), Some(&variants(&["G1V1"])));
    }
}
