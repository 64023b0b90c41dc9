//! Recoding of raw VCF calls into JoinMap genotype codes.
//!
//! This is where the population-specific code alphabets live. CP sites
//! branch on the segregation type classified from the parental calls;
//! F2/RIx sites use a single parent-relative rule.

use indexmap::IndexMap;

use crate::genotype::GenotypeCall;
use crate::io::vcf::VariantSite;
use crate::marker::JmMarker;
use crate::population::PopulationModel;
use crate::segregation::SegregationType;

/// Create a [`JmMarker`] from a variant site.
///
/// Every non-parent sample receives exactly one code, in VCF header
/// order. `parent_b` must be `Some` for CP; eligibility and parental
/// configuration are the caller's (pipeline's) responsibility.
///
/// `keep_invalid` controls what happens in CP's directional segregation
/// types (`<nnxnp>`, `<lmxll>`) when a sample's homozygous call cannot
/// result from the parental genotypes: `true` records the impossible
/// code (`pp` / `mm`) for downstream auditing, `false` collapses it to
/// the unknown code.
pub fn site_to_marker(
    site: &VariantSite,
    model: PopulationModel,
    parent_a: &str,
    parent_b: Option<&str>,
    keep_invalid: bool,
) -> JmMarker {
    let call_a = site.genotype(parent_a).unwrap_or(GenotypeCall::Missing);
    let call_b = parent_b
        .and_then(|name| site.genotype(name))
        .unwrap_or(GenotypeCall::Missing);

    let segregation = match model {
        PopulationModel::Cp => Some(SegregationType::classify(call_a, call_b)),
        PopulationModel::F2 | PopulationModel::Rix => None,
    };

    let mut codes = IndexMap::new();
    for name in site.sample_names() {
        if name == parent_a || parent_b == Some(name.as_str()) {
            continue;
        }
        let call = site.genotype(name).unwrap_or(GenotypeCall::Missing);
        let code = match model {
            PopulationModel::Cp => {
                // classify() returned Some above
                let segregation = segregation.unwrap_or(SegregationType::Invalid);
                recode_cp(segregation, call, call_a, call_b, keep_invalid)
            }
            PopulationModel::F2 | PopulationModel::Rix => {
                recode_single(call, call_a, parent_b.map(|_| call_b))
            }
        };
        codes.insert(name.clone(), code);
    }

    JmMarker {
        name: site.marker_name(),
        model,
        segregation,
        codes,
    }
}

/// Recode one sample's call for a CP population, branching on the site's
/// segregation type.
fn recode_cp(
    segregation: SegregationType,
    call: GenotypeCall,
    parent_a: GenotypeCall,
    parent_b: GenotypeCall,
    keep_invalid: bool,
) -> &'static str {
    match segregation {
        SegregationType::Nnxnp => recode_nnxnp(call, parent_a, keep_invalid),
        SegregationType::Lmxll => recode_lmxll(call, parent_b, keep_invalid),
        SegregationType::Hkxhk => recode_hkxhk(call),
        // once a site is classified invalid, no sample receives a
        // non-missing code
        SegregationType::Invalid => "--",
    }
}

/// `<nnxnp>`: parent A homozygous, parent B heterozygous.
fn recode_nnxnp(call: GenotypeCall, parent_a: GenotypeCall, keep_invalid: bool) -> &'static str {
    if call.is_homozygous() {
        if call == parent_a {
            "nn"
        } else if keep_invalid {
            // 'pp' cannot result from an nn x np cross
            "pp"
        } else {
            "--"
        }
    } else if call.is_heterozygous() {
        "np"
    } else {
        "--"
    }
}

/// `<lmxll>`: parent A heterozygous, parent B homozygous.
fn recode_lmxll(call: GenotypeCall, parent_b: GenotypeCall, keep_invalid: bool) -> &'static str {
    if call.is_homozygous() {
        if call == parent_b {
            "ll"
        } else if keep_invalid {
            // 'mm' cannot result from an lm x ll cross
            "mm"
        } else {
            "--"
        }
    } else if call.is_heterozygous() {
        "lm"
    } else {
        "--"
    }
}

/// `<hkxhk>`: both parents heterozygous; the two homozygous classes are
/// distinguishable by allele.
fn recode_hkxhk(call: GenotypeCall) -> &'static str {
    match call {
        GenotypeCall::HomRef => "hh",
        GenotypeCall::HomAlt => "kk",
        GenotypeCall::Het => "hk",
        GenotypeCall::Missing => "--",
    }
}

/// F2/RIx recoding: codes are relative to parent A's homozygous call. A
/// homozygous call that does not match parent A is the other parental
/// class (`b`) whether or not parent B was named.
fn recode_single(
    call: GenotypeCall,
    parent_a: GenotypeCall,
    _parent_b: Option<GenotypeCall>,
) -> &'static str {
    match call {
        GenotypeCall::Missing => "-",
        GenotypeCall::Het => "h",
        _ if call == parent_a => "a",
        _ => "b",
    }
}
