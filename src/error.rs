//! The [`Vcf2LocError`] `enum` definition and error messages.
//!
use std::num::ParseIntError;
use thiserror::Error;

/// The [`Vcf2LocError`] defines the standard set of errors that should
/// be passed to the user.
#[derive(Debug, Error)]
pub enum Vcf2LocError {
    // IO related errors
    #[error("File reading error: {0}")]
    IOError(#[from] std::io::Error),

    // VCF parsing related errors
    #[error("Integer parsing error: {0}")]
    ParseIntError(#[from] ParseIntError),
    #[error("VCF file has no #CHROM header line; sample names cannot be determined.")]
    MissingVcfHeader,
    #[error("VCF #CHROM header line has no sample columns.")]
    NoSamplesInHeader,
    #[error("VCF row has too few columns ({0}); the first nine columns and at least one genotype column are required.\nLine: {1}")]
    VcfTooFewColumns(usize, String),
    #[error("VCF FORMAT column has no GT subfield.\nLine: {0}")]
    MissingGenotypeSubfield(String),

    // Configuration errors; these must all surface before any output
    // bytes are written
    #[error("Unsupported population type '{0}' (supported: CP, F2, RIx).")]
    UnsupportedPopulationType(String),
    #[error("Population type CP requires a second parent (--parent-b).")]
    MissingParentB,
    #[error("Parent sample '{0}' is not present in the VCF header.")]
    ParentNotInHeader(String),
    #[error("Population name '{0}' cannot be longer than 20 characters.")]
    PopulationNameTooLong(String),
    #[error("Population name '{0}' cannot contain whitespace characters.")]
    PopulationNameWhitespace(String),
    #[error("Individual name '{0}' cannot be longer than 20 characters.")]
    IndividualNameTooLong(String),
    #[error("Individual name '{0}' cannot contain whitespace characters.")]
    IndividualNameWhitespace(String),

    // Command line tool related errors
    #[error("Command line argument error: {0}")]
    ArgumentError(#[from] clap::error::Error),
}
