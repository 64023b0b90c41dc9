use std::path::PathBuf;

use clap::Parser;
use vcf2loc::{
    commands::{vcf2loc_convert, ConvertConfig},
    error::Vcf2LocError,
};

const INFO: &str = "\
vcf2loc: generate a JoinMap loc file from a GBS pipeline VCF
";

#[derive(Parser)]
#[clap(name = "vcf2loc")]
#[clap(about = INFO)]
struct Cli {
    /// input GBS VCF file (plaintext or gzipped)
    #[arg(required = true)]
    input_vcf: PathBuf,

    /// output JoinMap loc file
    #[arg(short = 'o', long, required = true)]
    output_loc: PathBuf,

    /// output file population name; cannot contain spaces
    #[arg(long, default_value = "GBS")]
    name: String,

    /// population type (supported: CP, F2, RIx)
    #[arg(short = 't', long, required = true)]
    population_type: String,

    /// first parent sample name
    #[arg(short = 'a', long, required = true)]
    parent_a: String,

    /// second parent sample name (required for CP)
    #[arg(short = 'b', long)]
    parent_b: Option<String>,

    /// use only SNV sites
    #[arg(long)]
    snvs: bool,

    /// minimum DP (total depth, excluding parents) threshold for site
    #[arg(long)]
    min_dp: Option<u64>,

    /// maximum fraction of unknown calls per site
    #[arg(long, default_value_t = 1.0)]
    u_threshold: f64,

    /// maximum fraction (among known calls) of heterozygous calls per site
    #[arg(long, default_value_t = 1.0)]
    het_threshold: f64,

    /// maximum fraction (among known calls) of homozygous calls per site
    #[arg(long, default_value_t = 1.0)]
    hom_threshold: f64,

    /// keep calls which could not result from the parental genotypes
    #[arg(long)]
    keep_invalid_calls: bool,

    /// order individuals by natural sort of their names instead of VCF
    /// header order
    #[arg(long)]
    natural_sort: bool,
}

fn run() -> Result<(), Vcf2LocError> {
    let cli = Cli::parse();

    let config = ConvertConfig {
        input_vcf: cli.input_vcf,
        output_loc: cli.output_loc,
        population_name: cli.name,
        population_type: cli.population_type,
        parent_a: cli.parent_a,
        parent_b: cli.parent_b,
        snvs_only: cli.snvs,
        min_depth: cli.min_dp,
        unknown_threshold: cli.u_threshold,
        heterozygous_threshold: cli.het_threshold,
        homozygous_threshold: cli.hom_threshold,
        keep_invalid_calls: cli.keep_invalid_calls,
        natural_sort: cli.natural_sort,
    };

    let output = vcf2loc_convert(&config)?;
    for entry in output.report.entries() {
        eprintln!("{}", entry);
    }
    Ok(())
}

fn main() {
    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
