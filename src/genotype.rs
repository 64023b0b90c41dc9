//! The [`GenotypeCall`] type: one sample's diploid call at one site.

/// A single sample's genotype call at a variant site, as read from the
/// GT subfield of a VCF genotype column.
///
/// The two heterozygous orderings (`0/1` and `1/0`) are collapsed into a
/// single [`GenotypeCall::Het`] variant, since they carry the same
/// information for marker recoding. Phased separators (`|`) are treated
/// like unphased ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenotypeCall {
    /// Homozygous for the reference allele (`0/0`).
    HomRef,
    /// Homozygous for the alternate allele (`1/1`).
    HomAlt,
    /// Heterozygous (`0/1` or `1/0`).
    Het,
    /// Missing call (`./.`), or any call this converter cannot use
    /// (haploid calls, calls involving a second alternate allele).
    Missing,
}

impl GenotypeCall {
    /// Parse a GT subfield string into a [`GenotypeCall`].
    ///
    /// Anything that is not a biallelic diploid call maps to
    /// [`GenotypeCall::Missing`]; multiallelic sites are dropped by the
    /// conversion pipeline before recoding, so calls like `1/2` never
    /// influence output.
    pub fn from_gt(gt: &str) -> Self {
        match gt {
            "0/0" | "0|0" => GenotypeCall::HomRef,
            "1/1" | "1|1" => GenotypeCall::HomAlt,
            "0/1" | "1/0" | "0|1" | "1|0" => GenotypeCall::Het,
            _ => GenotypeCall::Missing,
        }
    }

    pub fn is_homozygous(&self) -> bool {
        matches!(self, GenotypeCall::HomRef | GenotypeCall::HomAlt)
    }

    pub fn is_heterozygous(&self) -> bool {
        matches!(self, GenotypeCall::Het)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, GenotypeCall::Missing)
    }
}
