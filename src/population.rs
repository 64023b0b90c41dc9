//! Population models and the marker-eligibility predicate.

use crate::error::Vcf2LocError;
use crate::genotype::GenotypeCall;
use crate::io::vcf::VariantSite;
use crate::segregation::SegregationType;

/// The population (cross design) a loc file is generated for.
///
/// The model determines both which sites are usable markers and which
/// JoinMap code alphabet samples are recoded into. Keeping this a closed
/// `enum` makes every dispatch on the model an exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopulationModel {
    /// Cross-pollinated population: two heterozygous parents, both
    /// required. Pair codes (`nn`/`np`, `ll`/`lm`, `hh`/`hk`/`kk`).
    Cp,
    /// F2 population from a cross of two homozygous parents. Single
    /// character codes (`a`, `b`, `h`).
    F2,
    /// Recombinant inbred line population (`RI2`, `RI8`, ... `RIx`).
    /// Same eligibility and code alphabet as F2.
    Rix,
}

impl PopulationModel {
    /// Parse a JoinMap population type tag (e.g. `CP`, `F2`, `RI8`).
    ///
    /// RI populations carry a generation suffix; any `RI` tag followed by
    /// digits (or the generic `x`) is accepted. The raw tag is preserved
    /// by the caller for the loc header's `popt` field.
    pub fn from_tag(tag: &str) -> Result<Self, Vcf2LocError> {
        match tag {
            "CP" => Ok(PopulationModel::Cp),
            "F2" => Ok(PopulationModel::F2),
            _ => {
                let generation = tag.strip_prefix("RI").unwrap_or("");
                if generation == "x" || generation.chars().all(|c| c.is_ascii_digit()) {
                    if generation.is_empty() {
                        Err(Vcf2LocError::UnsupportedPopulationType(tag.to_string()))
                    } else {
                        Ok(PopulationModel::Rix)
                    }
                } else {
                    Err(Vcf2LocError::UnsupportedPopulationType(tag.to_string()))
                }
            }
        }
    }

    /// CP crosses need both parental samples; F2/RIx work from parent A
    /// alone.
    pub fn requires_parent_b(&self) -> bool {
        matches!(self, PopulationModel::Cp)
    }

    /// The code written for an unknown genotype under this model.
    pub fn missing_code(&self) -> &'static str {
        match self {
            PopulationModel::Cp => "--",
            PopulationModel::F2 | PopulationModel::Rix => "-",
        }
    }
}

/// Decide whether a site can serve as a genetic marker for the given
/// population model and parents.
///
/// This is a pure predicate over the site's genotype calls:
///
/// - CP: eligible iff at least one parent is heterozygous and neither
///   parental combination is invalid, i.e. the segregation classification
///   is not [`SegregationType::Invalid`].
/// - F2/RIx with both parents: eligible iff both parental calls are
///   homozygous and differ.
/// - F2/RIx with parent A only: eligible iff parent A's call is
///   homozygous and at least one other sample has a non-missing call that
///   differs from it; a site where every sample matches parent A carries
///   no segregating information.
///
/// Parent membership in the sample list is validated at configuration
/// time; a parent absent from the site is treated as a missing call,
/// which makes the site ineligible.
pub fn is_potential_marker(
    site: &VariantSite,
    model: PopulationModel,
    parent_a: &str,
    parent_b: Option<&str>,
) -> bool {
    let call_a = site.genotype(parent_a).unwrap_or(GenotypeCall::Missing);
    let call_b = parent_b.and_then(|name| site.genotype(name));

    match model {
        PopulationModel::Cp => {
            let call_b = call_b.unwrap_or(GenotypeCall::Missing);
            SegregationType::classify(call_a, call_b) != SegregationType::Invalid
        }
        PopulationModel::F2 | PopulationModel::Rix => match call_b {
            Some(call_b) => {
                call_a.is_homozygous() && call_b.is_homozygous() && call_a != call_b
            }
            None => {
                call_a.is_homozygous()
                    && site.sample_names().into_iter().any(|name| {
                        let call = site.genotype(name).unwrap_or(GenotypeCall::Missing);
                        name != parent_a && !call.is_missing() && call != call_a
                    })
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{is_potential_marker, PopulationModel};
    use crate::test_utilities::site_with_genotypes;

    #[test]
    fn test_from_tag() {
        assert_eq!(
            PopulationModel::from_tag("CP").unwrap(),
            PopulationModel::Cp
        );
        assert_eq!(
            PopulationModel::from_tag("F2").unwrap(),
            PopulationModel::F2
        );
        assert_eq!(
            PopulationModel::from_tag("RIx").unwrap(),
            PopulationModel::Rix
        );
        assert_eq!(
            PopulationModel::from_tag("RI8").unwrap(),
            PopulationModel::Rix
        );
        assert!(PopulationModel::from_tag("BC1").is_err());
        assert!(PopulationModel::from_tag("RI").is_err());
        assert!(PopulationModel::from_tag("RIabc").is_err());
        assert!(PopulationModel::from_tag("cp").is_err());
    }

    #[test]
    fn test_cp_eligibility() {
        let site = site_with_genotypes(&[("pa", "0/0"), ("pb", "0/1"), ("s1", "0/0")]);
        assert!(is_potential_marker(
            &site,
            PopulationModel::Cp,
            "pa",
            Some("pb")
        ));

        let site = site_with_genotypes(&[("pa", "0/1"), ("pb", "0/1"), ("s1", "0/0")]);
        assert!(is_potential_marker(
            &site,
            PopulationModel::Cp,
            "pa",
            Some("pb")
        ));

        // both parents homozygous: no CP segregation
        let site = site_with_genotypes(&[("pa", "0/0"), ("pb", "1/1"), ("s1", "0/1")]);
        assert!(!is_potential_marker(
            &site,
            PopulationModel::Cp,
            "pa",
            Some("pb")
        ));

        // missing parent call
        let site = site_with_genotypes(&[("pa", "./."), ("pb", "0/1"), ("s1", "0/1")]);
        assert!(!is_potential_marker(
            &site,
            PopulationModel::Cp,
            "pa",
            Some("pb")
        ));
    }

    #[test]
    fn test_f2_two_parent_eligibility() {
        let site = site_with_genotypes(&[("pa", "0/0"), ("pb", "1/1"), ("s1", "0/1")]);
        assert!(is_potential_marker(
            &site,
            PopulationModel::F2,
            "pa",
            Some("pb")
        ));

        // same homozygous call in both parents
        let site = site_with_genotypes(&[("pa", "0/0"), ("pb", "0/0"), ("s1", "0/1")]);
        assert!(!is_potential_marker(
            &site,
            PopulationModel::F2,
            "pa",
            Some("pb")
        ));

        // a heterozygous parent is not homozygous
        let site = site_with_genotypes(&[("pa", "0/1"), ("pb", "1/1"), ("s1", "0/1")]);
        assert!(!is_potential_marker(
            &site,
            PopulationModel::F2,
            "pa",
            Some("pb")
        ));
    }

    #[test]
    fn test_f2_single_parent_eligibility() {
        // some sample differs from parent A
        let site = site_with_genotypes(&[("pa", "0/0"), ("s1", "0/0"), ("s2", "1/1")]);
        assert!(is_potential_marker(&site, PopulationModel::F2, "pa", None));

        // every sample matches parent A or is missing: no variation
        let site = site_with_genotypes(&[("pa", "0/0"), ("s1", "0/0"), ("s2", "./.")]);
        assert!(!is_potential_marker(&site, PopulationModel::F2, "pa", None));

        // heterozygous parent A is never a usable F2/RIx parent
        let site = site_with_genotypes(&[("pa", "0/1"), ("s1", "0/0"), ("s2", "1/1")]);
        assert!(!is_potential_marker(&site, PopulationModel::F2, "pa", None));
    }

    #[test]
    fn test_missing_code() {
        assert_eq!(PopulationModel::Cp.missing_code(), "--");
        assert_eq!(PopulationModel::F2.missing_code(), "-");
        assert_eq!(PopulationModel::Rix.missing_code(), "-");
    }
}
