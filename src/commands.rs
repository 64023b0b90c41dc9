//! The conversion command: the per-site filtering pipeline between the
//! VCF reader and the loc writer.

use std::path::PathBuf;

use crate::{
    error::Vcf2LocError,
    io::{loc::LocWriter, vcf::VcfReader},
    population::{is_potential_marker, PopulationModel},
    recode::site_to_marker,
    reporting::{CommandOutput, Report},
};

/// Everything `vcf2loc_convert` needs, bound from the CLI.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    pub input_vcf: PathBuf,
    pub output_loc: PathBuf,
    pub population_name: String,
    /// The raw population type tag (`CP`, `F2`, `RI8`, ...); echoed into
    /// the loc header's `popt` field.
    pub population_type: String,
    pub parent_a: String,
    pub parent_b: Option<String>,
    /// Keep only single-nucleotide variant sites.
    pub snvs_only: bool,
    /// Minimum total depth across offspring (site depth minus parent
    /// depths); `None` disables the check.
    pub min_depth: Option<u64>,
    /// Per-marker fraction ceilings; 1.0 means no filtering.
    pub unknown_threshold: f64,
    pub heterozygous_threshold: f64,
    pub homozygous_threshold: f64,
    pub keep_invalid_calls: bool,
    pub natural_sort: bool,
}

/// Convert a GBS VCF file into a JoinMap loc file.
///
/// Configuration problems (bad population tag, missing parent B for CP,
/// parents absent from the VCF header, over-long or whitespace-bearing
/// names) are fatal and surface before the output file is created.
/// Per-site conditions are not errors: the site is skipped and counted,
/// and the counts are returned in the [`Report`].
pub fn vcf2loc_convert(
    config: &ConvertConfig,
) -> Result<CommandOutput<usize>, Vcf2LocError> {
    let model = PopulationModel::from_tag(&config.population_type)?;
    let parent_a = config.parent_a.as_str();
    let parent_b = config.parent_b.as_deref();
    if model.requires_parent_b() && parent_b.is_none() {
        return Err(Vcf2LocError::MissingParentB);
    }

    let reader = VcfReader::new(&config.input_vcf)?;
    for parent in std::iter::once(parent_a).chain(parent_b) {
        if !reader.sample_names().iter().any(|name| name == parent) {
            return Err(Vcf2LocError::ParentNotInHeader(parent.to_string()));
        }
    }

    let mut writer = LocWriter::new(
        &config.output_loc,
        &config.population_name,
        &config.population_type,
        parent_a,
        parent_b,
        reader.sample_names(),
        config.natural_sort,
    )?;

    // for reporting stuff to the user
    let mut report = Report::new();
    let mut skipped_multiallelic = 0;
    let mut skipped_non_snv = 0;
    let mut skipped_low_depth = 0;
    let mut skipped_ineligible = 0;
    let mut skipped_thresholds = 0;

    for result in reader {
        let site = result?;

        if site.alt_alleles.len() > 1 {
            skipped_multiallelic += 1;
            continue;
        }
        if config.snvs_only && !site.is_snv() {
            skipped_non_snv += 1;
            continue;
        }
        if let Some(min_depth) = config.min_depth {
            let parent_depth: u64 = std::iter::once(parent_a)
                .chain(parent_b)
                .map(|name| site.sample_depth(name))
                .sum();
            let offspring_depth = site.depth.saturating_sub(parent_depth);
            if offspring_depth < min_depth {
                skipped_low_depth += 1;
                continue;
            }
        }
        if !is_potential_marker(&site, model, parent_a, parent_b) {
            skipped_ineligible += 1;
            continue;
        }

        let marker = site_to_marker(&site, model, parent_a, parent_b, config.keep_invalid_calls);
        if marker.unknown_fraction() > config.unknown_threshold
            || marker.homozygous_fraction() > config.homozygous_threshold
            || marker.heterozygous_fraction() > config.heterozygous_threshold
        {
            skipped_thresholds += 1;
            continue;
        }

        writer.write_marker(marker);
    }

    let written = writer.finish()?;

    report.add_count(skipped_multiallelic, "multiallelic site(s) skipped");
    report.add_count(skipped_non_snv, "non-SNV site(s) skipped");
    report.add_count(skipped_low_depth, "low-depth site(s) skipped");
    report.add_count(
        skipped_ineligible,
        "site(s) skipped as unusable markers for this population",
    );
    report.add_count(
        skipped_thresholds,
        "site(s) skipped by unknown/homozygous/heterozygous thresholds",
    );
    report.add_issue(format!("{} marker(s) written", written));

    Ok(CommandOutput::new(written, report))
}
