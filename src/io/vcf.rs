//! A lazy parser for GBS VCF files.
//!
//! [`VcfReader`] is a single-pass parsing iterator: the `##` meta lines
//! and the `#CHROM` header are consumed up front to recover the ordered
//! sample-name list, then each data row is parsed on demand into a
//! [`VariantSite`]. Only the fields this converter needs are extracted
//! (GT always, DP when present); everything else in the row is ignored.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::Vcf2LocError;
use crate::genotype::GenotypeCall;
use crate::io::file::InputFile;

pub const PARSE_CAPACITY: usize = 1024;

/// One sample's parsed genotype column at a site.
#[derive(Clone, Copy, Debug)]
pub struct SampleCall {
    pub genotype: GenotypeCall,
    /// Per-sample read depth (the DP subfield), when reported.
    pub depth: Option<u64>,
}

/// One parsed VCF data row.
///
/// Sample order follows the VCF header, which is semantically meaningful:
/// the loc writer emits genotype codes in this order unless natural
/// sorting is requested.
#[derive(Clone, Debug)]
pub struct VariantSite {
    pub chrom: String,
    pub pos: u64,
    /// Site identifiers from the ID column, split on `;`. A site without
    /// identifiers carries the single placeholder `.`.
    pub ids: Vec<String>,
    pub ref_allele: String,
    pub alt_alleles: Vec<String>,
    /// Total site depth: the INFO `DP` value when present, otherwise the
    /// sum of per-sample DP values.
    pub depth: u64,
    calls: IndexMap<String, SampleCall>,
}

impl VariantSite {
    /// Parse a VCF data line against the header's sample names.
    pub fn parse(line: &str, sample_names: &[String]) -> Result<Self, Vcf2LocError> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < 10 {
            return Err(Vcf2LocError::VcfTooFewColumns(
                columns.len(),
                line.to_string(),
            ));
        }

        let chrom = columns[0].to_string();
        let pos: u64 = columns[1].parse()?;
        let ids: Vec<String> = columns[2].split(';').map(String::from).collect();
        let ref_allele = columns[3].to_string();
        let alt_alleles: Vec<String> = columns[4].split(',').map(String::from).collect();

        let format: Vec<&str> = columns[8].split(':').collect();
        let gt_index = format
            .iter()
            .position(|&key| key == "GT")
            .ok_or_else(|| Vcf2LocError::MissingGenotypeSubfield(line.to_string()))?;
        let dp_index = format.iter().position(|&key| key == "DP");

        let mut calls = IndexMap::with_capacity(sample_names.len());
        for (name, field) in sample_names.iter().zip(&columns[9..]) {
            let subfields: Vec<&str> = field.split(':').collect();
            // trailing subfields may be dropped from a genotype column;
            // an absent GT is a missing call
            let genotype = subfields
                .get(gt_index)
                .map_or(GenotypeCall::Missing, |gt| GenotypeCall::from_gt(gt));
            let depth = match dp_index.and_then(|i| subfields.get(i)) {
                Some(&value) if !value.is_empty() && value != "." => Some(value.parse()?),
                _ => None,
            };
            calls.insert(name.clone(), SampleCall { genotype, depth });
        }

        let depth = match Self::info_depth(columns[7]) {
            Some(value) => value.parse()?,
            None => calls.values().filter_map(|call| call.depth).sum(),
        };

        Ok(Self {
            chrom,
            pos,
            ids,
            ref_allele,
            alt_alleles,
            depth,
            calls,
        })
    }

    /// Extract the `DP` value from the INFO column, if one is set.
    fn info_depth(info: &str) -> Option<&str> {
        info.split(';')
            .find_map(|subfield| subfield.strip_prefix("DP="))
    }

    /// The sample's genotype call, or `None` if the sample is not present
    /// at this site.
    pub fn genotype(&self, sample: &str) -> Option<GenotypeCall> {
        self.calls.get(sample).map(|call| call.genotype)
    }

    /// The sample's read depth; a sample without a DP subfield
    /// contributes zero depth.
    pub fn sample_depth(&self, sample: &str) -> u64 {
        self.calls
            .get(sample)
            .and_then(|call| call.depth)
            .unwrap_or(0)
    }

    /// Sample names in VCF header order.
    pub fn sample_names(&self) -> Vec<&String> {
        self.calls.keys().collect()
    }

    /// Whether this site is a pure single-nucleotide variant: the
    /// reference allele and every alternate allele are one base long
    /// (indels are longer).
    pub fn is_snv(&self) -> bool {
        self.ref_allele.len() == 1 && self.alt_alleles.iter().all(|alt| alt.len() == 1)
    }

    /// The marker name for this site: the first site identifier if one
    /// was assigned, otherwise `chrom_pos`.
    pub fn marker_name(&self) -> String {
        match self.ids.first() {
            Some(id) if id != "." => id.clone(),
            _ => format!("{}_{}", self.chrom, self.pos),
        }
    }
}

/// A lazy parsing iterator over the data rows of a (possibly gzipped)
/// VCF file.
pub struct VcfReader {
    reader: BufReader<Box<dyn std::io::Read>>,
    sample_names: Vec<String>,
    line_buffer: String,
}

impl std::fmt::Debug for VcfReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VcfReader")
            .field("sample_names", &self.sample_names)
            .finish_non_exhaustive()
    }
}

impl VcfReader {
    /// Open a VCF file and consume its header, leaving the reader
    /// positioned at the first data row.
    pub fn new(filepath: impl Into<PathBuf>) -> Result<Self, Vcf2LocError> {
        let input_file = InputFile::new(filepath);
        let mut reader = input_file.reader()?;

        let mut line = String::with_capacity(PARSE_CAPACITY);
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(Vcf2LocError::MissingVcfHeader);
            }
            if line.starts_with("##") {
                continue;
            }
            if line.starts_with("#CHROM") {
                break;
            }
            // a data row before any #CHROM line: the header is missing
            return Err(Vcf2LocError::MissingVcfHeader);
        }

        let header_columns: Vec<&str> = line.trim_end().split('\t').collect();
        if header_columns.len() < 10 {
            return Err(Vcf2LocError::NoSamplesInHeader);
        }
        let sample_names = header_columns[9..].iter().map(|s| s.to_string()).collect();

        Ok(Self {
            reader,
            sample_names,
            line_buffer: String::with_capacity(PARSE_CAPACITY),
        })
    }

    /// Sample names from the `#CHROM` header line, in file order.
    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }
}

impl Iterator for VcfReader {
    type Item = Result<VariantSite, Vcf2LocError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = self.line_buffer.trim_end();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(VariantSite::parse(line, &self.sample_names));
                }
                Err(e) => return Some(Err(Vcf2LocError::IOError(e))),
            }
        }
    }
}
