//! `vcf2loc` converts genotyping-by-sequencing (GBS) VCF files into
//! JoinMap locus genotype (`.loc`) files for linkage mapping.
//!
//! The library side exposes the conversion building blocks: genotype
//! calls, segregation classification, marker eligibility, recoding into
//! JoinMap code alphabets, and the loc writer. The `vcf2loc` binary wires
//! them together behind a command line interface.

pub mod commands;
pub mod error;
pub mod genotype;
pub mod io;
pub mod marker;
pub mod population;
pub mod recode;
pub mod reporting;
pub mod segregation;
pub mod sort;
pub mod test_utilities;

pub mod prelude {
    pub use crate::commands::{vcf2loc_convert, ConvertConfig};
    pub use crate::error::Vcf2LocError;
    pub use crate::genotype::GenotypeCall;
    pub use crate::io::loc::LocWriter;
    pub use crate::io::vcf::{VariantSite, VcfReader};
    pub use crate::marker::JmMarker;
    pub use crate::population::{is_potential_marker, PopulationModel};
    pub use crate::recode::site_to_marker;
    pub use crate::segregation::SegregationType;
}
