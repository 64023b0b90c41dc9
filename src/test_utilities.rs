//! Test cases and test utility functions.
//!

use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::io::vcf::VariantSite;

// Stochastic test defaults
//
// Number of random sites used by invariant tests; the tradeoff is
// catching stochastic errors vs test time.
pub const NRANDOM_SITES: usize = 500;

// offspring per random site
pub const MIN_SAMPLES: usize = 2;
pub const MAX_SAMPLES: usize = 24;

/// GT strings a GBS caller can emit for a biallelic diploid site.
pub const GT_STRINGS: [&str; 5] = ["0/0", "0/1", "1/0", "1/1", "./."];

/// Build a [`VariantSite`] from explicit (sample, GT) pairs.
///
/// The site is a plain biallelic SNV at `chr1:100` with no assigned
/// identifier, which is all most unit tests need.
pub fn site_with_genotypes(genotypes: &[(&str, &str)]) -> VariantSite {
    let sample_names: Vec<String> = genotypes.iter().map(|(name, _)| name.to_string()).collect();
    let fields: Vec<&str> = genotypes.iter().map(|(_, gt)| *gt).collect();
    let line = format!(
        "chr1\t100\t.\tA\tG\t40\tPASS\tDP=30\tGT\t{}",
        fields.join("\t")
    );
    VariantSite::parse(&line, &sample_names).expect("test VCF line should parse")
}

/// Sample a random GT string.
pub fn random_gt() -> &'static str {
    let mut rng = thread_rng();
    GT_STRINGS.choose(&mut rng).copied().unwrap()
}

/// Build a random site with the given parental GT strings and a random
/// number of randomly-called offspring named `s1`, `s2`, ...
pub fn random_site(parent_gts: &[(&str, &str)]) -> VariantSite {
    let mut rng = thread_rng();
    let n_samples = rng.gen_range(MIN_SAMPLES..=MAX_SAMPLES);

    let mut genotypes: Vec<(String, &str)> = parent_gts
        .iter()
        .map(|(name, gt)| (name.to_string(), *gt))
        .collect();
    for i in 0..n_samples {
        genotypes.push((format!("s{}", i + 1), random_gt()));
    }

    let pairs: Vec<(&str, &str)> = genotypes
        .iter()
        .map(|(name, gt)| (name.as_str(), *gt))
        .collect();
    site_with_genotypes(&pairs)
}

#[cfg(test)]
mod tests {
    use super::{random_site, site_with_genotypes, MAX_SAMPLES, MIN_SAMPLES};
    use crate::genotype::GenotypeCall;

    #[test]
    fn test_site_with_genotypes() {
        let site = site_with_genotypes(&[("pa", "0/0"), ("s1", "0/1")]);
        assert_eq!(site.genotype("pa"), Some(GenotypeCall::HomRef));
        assert_eq!(site.genotype("s1"), Some(GenotypeCall::Het));
        assert_eq!(site.genotype("nobody"), None);
    }

    #[test]
    fn test_random_site_shape() {
        let site = random_site(&[("pa", "0/0"), ("pb", "0/1")]);
        let n = site.sample_names().len();
        assert!(n >= 2 + MIN_SAMPLES && n <= 2 + MAX_SAMPLES);
        assert_eq!(site.genotype("pa"), Some(GenotypeCall::HomRef));
    }
}
