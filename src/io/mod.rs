//! Types and methods for reading and parsing input and writing output.

pub mod file;
pub mod loc;
pub mod vcf;

pub use file::InputFile;
pub use loc::LocWriter;
pub use vcf::{VariantSite, VcfReader};
