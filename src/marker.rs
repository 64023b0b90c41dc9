//! The [`JmMarker`] record: one site recoded into JoinMap genotype codes,
//! with the derived statistics used for threshold filtering.

use indexmap::IndexMap;

use crate::population::PopulationModel;
use crate::segregation::SegregationType;

/// Codes that count as homozygous across all supported population models.
const HOMOZYGOUS_CODES: [&str; 8] = ["hh", "kk", "ll", "mm", "nn", "pp", "a", "b"];

/// Codes that count as heterozygous across all supported population models.
const HETEROZYGOUS_CODES: [&str; 4] = ["hk", "lm", "np", "h"];

/// Data for one JoinMap marker row.
///
/// Built once per accepted site by [`crate::recode::site_to_marker`] and
/// not mutated afterward. The code map holds exactly one code per
/// non-parent sample, in VCF header order. All statistics are derived on
/// demand from the code map.
#[derive(Clone, Debug, PartialEq)]
pub struct JmMarker {
    pub name: String,
    pub model: PopulationModel,
    /// Segregation type; `Some` exactly for CP markers.
    pub segregation: Option<SegregationType>,
    pub codes: IndexMap<String, &'static str>,
}

impl JmMarker {
    /// The code this marker's model writes for an unknown genotype.
    fn missing_code(&self) -> &'static str {
        self.model.missing_code()
    }

    /// The number of unknown genotypes for this marker.
    pub fn unknown_count(&self) -> usize {
        let missing = self.missing_code();
        self.codes.values().filter(|&code| *code == missing).count()
    }

    /// The number of known genotypes for this marker.
    pub fn known_count(&self) -> usize {
        self.codes.len() - self.unknown_count()
    }

    /// The fraction of unknown genotypes for this marker; 0.0 for an
    /// empty code map.
    pub fn unknown_fraction(&self) -> f64 {
        fraction(self.unknown_count(), self.codes.len())
    }

    /// The number of homozygous genotypes for this marker.
    pub fn homozygous_count(&self) -> usize {
        self.codes
            .values()
            .filter(|code| HOMOZYGOUS_CODES.contains(code))
            .count()
    }

    /// The fraction of homozygous genotypes among known genotypes; 0.0
    /// when every genotype is unknown.
    pub fn homozygous_fraction(&self) -> f64 {
        fraction(self.homozygous_count(), self.known_count())
    }

    /// The number of heterozygous genotypes for this marker.
    pub fn heterozygous_count(&self) -> usize {
        self.codes
            .values()
            .filter(|code| HETEROZYGOUS_CODES.contains(code))
            .count()
    }

    /// The fraction of heterozygous genotypes among known genotypes; 0.0
    /// when every genotype is unknown.
    pub fn heterozygous_fraction(&self) -> f64 {
        fraction(self.heterozygous_count(), self.known_count())
    }
}

fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
