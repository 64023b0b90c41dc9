//! CP segregation-type classification from the two parental calls.

use std::fmt;

use crate::genotype::GenotypeCall;

/// The segregation type of a CP (cross-pollinated) marker, determined by
/// which parent is heterozygous.
///
/// JoinMap's `<abxcd>` and `<efxeg>` types need more than two alleles and
/// are not produced by this converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegregationType {
    /// Parent A homozygous, parent B heterozygous (`<nnxnp>`).
    Nnxnp,
    /// Parent A heterozygous, parent B homozygous (`<lmxll>`).
    Lmxll,
    /// Both parents heterozygous (`<hkxhk>`).
    Hkxhk,
    /// Any other parental combination; no sample at the site can be
    /// recoded to a non-missing code.
    Invalid,
}

impl SegregationType {
    /// Classify a site's segregation type from the two parental calls.
    ///
    /// The rules are checked in order; the first match wins:
    ///
    /// 1. A homozygous, B heterozygous → [`SegregationType::Nnxnp`]
    /// 2. A heterozygous, B homozygous → [`SegregationType::Lmxll`]
    /// 3. both heterozygous → [`SegregationType::Hkxhk`]
    /// 4. anything else (both homozygous, or a missing parent) →
    ///    [`SegregationType::Invalid`]
    pub fn classify(parent_a: GenotypeCall, parent_b: GenotypeCall) -> Self {
        if parent_a.is_homozygous() && parent_b.is_heterozygous() {
            SegregationType::Nnxnp
        } else if parent_a.is_heterozygous() && parent_b.is_homozygous() {
            SegregationType::Lmxll
        } else if parent_a.is_heterozygous() && parent_b.is_heterozygous() {
            SegregationType::Hkxhk
        } else {
            SegregationType::Invalid
        }
    }

    /// The JoinMap loc-file segregation tag, e.g. `<nnxnp>`.
    ///
    /// [`SegregationType::Invalid`] has no tag; invalid sites are never
    /// written to a loc file.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            SegregationType::Nnxnp => Some("<nnxnp>"),
            SegregationType::Lmxll => Some("<lmxll>"),
            SegregationType::Hkxhk => Some("<hkxhk>"),
            SegregationType::Invalid => None,
        }
    }
}

impl fmt::Display for SegregationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag().unwrap_or("invalid"))
    }
}

#[cfg(test)]
mod tests {
    use super::SegregationType;
    use crate::genotype::GenotypeCall::*;

    #[test]
    fn test_classify_hom_het() {
        assert_eq!(
            SegregationType::classify(HomRef, Het),
            SegregationType::Nnxnp
        );
        assert_eq!(
            SegregationType::classify(HomAlt, Het),
            SegregationType::Nnxnp
        );
    }

    #[test]
    fn test_classify_het_hom() {
        assert_eq!(
            SegregationType::classify(Het, HomRef),
            SegregationType::Lmxll
        );
        assert_eq!(
            SegregationType::classify(Het, HomAlt),
            SegregationType::Lmxll
        );
    }

    #[test]
    fn test_classify_het_het() {
        assert_eq!(SegregationType::classify(Het, Het), SegregationType::Hkxhk);
    }

    #[test]
    fn test_classify_invalid() {
        // both homozygous: no segregation in a CP cross
        assert_eq!(
            SegregationType::classify(HomRef, HomRef),
            SegregationType::Invalid
        );
        assert_eq!(
            SegregationType::classify(HomRef, HomAlt),
            SegregationType::Invalid
        );
        // a missing parent cannot be classified
        assert_eq!(
            SegregationType::classify(Missing, Het),
            SegregationType::Invalid
        );
        assert_eq!(
            SegregationType::classify(Het, Missing),
            SegregationType::Invalid
        );
        assert_eq!(
            SegregationType::classify(Missing, Missing),
            SegregationType::Invalid
        );
    }

    #[test]
    fn test_tags() {
        assert_eq!(SegregationType::Nnxnp.tag(), Some("<nnxnp>"));
        assert_eq!(SegregationType::Lmxll.tag(), Some("<lmxll>"));
        assert_eq!(SegregationType::Hkxhk.tag(), Some("<hkxhk>"));
        assert_eq!(SegregationType::Invalid.tag(), None);
        assert_eq!(SegregationType::Nnxnp.to_string(), "<nnxnp>");
    }
}
