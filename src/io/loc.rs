//! Writing JoinMap locus genotype (`.loc`) files with [`LocWriter`].
//!
//! The loc format needs the final marker count in its header (`nloc`).
//! Rather than writing a placeholder and patching the file afterward,
//! accepted markers are buffered and the complete file is written once by
//! [`LocWriter::finish`]. GBS loc files are small, so the buffer is
//! cheap, and no partially-written file can be left behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::Vcf2LocError;
use crate::marker::JmMarker;
use crate::sort::natural_sort_key;

/// JoinMap limits population and individual names to this length.
const MAX_NAME_LENGTH: usize = 20;

/// Buffers JoinMap markers and writes a complete loc file.
///
/// All name validation happens at construction, before any output file
/// exists. The child (non-parent) individual order fixed here governs the
/// order of genotype codes on every marker row and of the individual-name
/// footer.
#[derive(Debug)]
pub struct LocWriter {
    filepath: PathBuf,
    population_name: String,
    population_type: String,
    individual_names: Vec<String>,
    markers: Vec<JmMarker>,
}

impl LocWriter {
    /// Set up a loc writer for the given population and sample list.
    ///
    /// `sample_names` is the full VCF header sample list; the parents are
    /// removed to form the individual (child) list. With `natural_sort`
    /// the children are ordered by numeric-aware name sorting instead of
    /// header order.
    pub fn new(
        filepath: impl Into<PathBuf>,
        population_name: &str,
        population_type: &str,
        parent_a: &str,
        parent_b: Option<&str>,
        sample_names: &[String],
        natural_sort: bool,
    ) -> Result<Self, Vcf2LocError> {
        validate_population_name(population_name)?;

        let mut individual_names: Vec<String> = sample_names
            .iter()
            .filter(|name| name.as_str() != parent_a && Some(name.as_str()) != parent_b)
            .cloned()
            .collect();
        for name in &individual_names {
            validate_individual_name(name)?;
        }
        if natural_sort {
            individual_names.sort_by_key(|name| natural_sort_key(name));
        }

        Ok(Self {
            filepath: filepath.into(),
            population_name: population_name.to_string(),
            population_type: population_type.to_string(),
            individual_names,
            markers: Vec::new(),
        })
    }

    /// Queue one marker row for output.
    pub fn write_marker(&mut self, marker: JmMarker) {
        self.markers.push(marker);
    }

    /// The number of markers queued so far.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// The child individual names, in output order.
    pub fn individual_names(&self) -> &[String] {
        &self.individual_names
    }

    /// Write the complete loc file: header, marker rows, and the
    /// individual-name footer. Returns the number of markers written.
    pub fn finish(self) -> Result<usize, Vcf2LocError> {
        let mut writer = BufWriter::new(File::create(&self.filepath)?);

        writeln!(writer, "name = {}", self.population_name)?;
        writeln!(writer, "popt = {}", self.population_type)?;
        writeln!(writer, "nloc = {}", self.markers.len())?;
        writeln!(writer, "nind = {}", self.individual_names.len())?;

        for marker in &self.markers {
            match marker.segregation {
                Some(segregation) => writeln!(writer, "{} {}", marker.name, segregation)?,
                None => writeln!(writer, "{}", marker.name)?,
            }
            let codes: Vec<&str> = self
                .individual_names
                .iter()
                .map(|name| {
                    marker
                        .codes
                        .get(name)
                        .copied()
                        .unwrap_or_else(|| marker.model.missing_code())
                })
                .collect();
            writeln!(writer, "   {}", codes.join(" "))?;
        }

        writeln!(writer, "individual names:")?;
        for name in &self.individual_names {
            writeln!(writer, "{}", name)?;
        }
        writer.flush()?;

        Ok(self.markers.len())
    }
}

fn validate_population_name(name: &str) -> Result<(), Vcf2LocError> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(Vcf2LocError::PopulationNameTooLong(name.to_string()));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Vcf2LocError::PopulationNameWhitespace(name.to_string()));
    }
    Ok(())
}

fn validate_individual_name(name: &str) -> Result<(), Vcf2LocError> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(Vcf2LocError::IndividualNameTooLong(name.to_string()));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Vcf2LocError::IndividualNameWhitespace(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LocWriter;
    use crate::marker::JmMarker;
    use crate::population::PopulationModel;
    use crate::segregation::SegregationType;

    fn sample_names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn cp_marker(name: &str, codes: &[(&str, &'static str)]) -> JmMarker {
        JmMarker {
            name: name.to_string(),
            model: PopulationModel::Cp,
            segregation: Some(SegregationType::Nnxnp),
            codes: codes
                .iter()
                .map(|(sample, code)| (sample.to_string(), *code))
                .collect(),
        }
    }

    #[test]
    fn test_loc_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.loc");

        let names = sample_names(&["pa", "pb", "s1", "s2"]);
        let mut writer =
            LocWriter::new(&path, "GBS", "CP", "pa", Some("pb"), &names, false).unwrap();
        writer.write_marker(cp_marker("m1", &[("s1", "nn"), ("s2", "np")]));
        writer.write_marker(cp_marker("m2", &[("s1", "--"), ("s2", "nn")]));
        let written = writer.finish().unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let expected = "name = GBS\n\
                        popt = CP\n\
                        nloc = 2\n\
                        nind = 2\n\
                        m1 <nnxnp>\n   nn np\n\
                        m2 <nnxnp>\n   -- nn\n\
                        individual names:\ns1\ns2\n";
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_marker_without_segregation_tag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f2.loc");

        let names = sample_names(&["pa", "s1", "s2"]);
        let mut writer = LocWriter::new(&path, "pop", "F2", "pa", None, &names, false).unwrap();
        writer.write_marker(JmMarker {
            name: "m1".to_string(),
            model: PopulationModel::F2,
            segregation: None,
            codes: [("s1", "a"), ("s2", "h")]
                .iter()
                .map(|(sample, code)| (sample.to_string(), *code))
                .collect(),
        });
        writer.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("popt = F2\n"));
        assert!(contents.contains("m1\n   a h\n"));
    }

    #[test]
    fn test_natural_sort_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sorted.loc");

        let names = sample_names(&["pa", "pb", "s10", "s2", "s1"]);
        let writer = LocWriter::new(&path, "GBS", "CP", "pa", Some("pb"), &names, true).unwrap();
        assert_eq!(writer.individual_names(), &["s1", "s2", "s10"]);

        let unsorted = LocWriter::new(&path, "GBS", "CP", "pa", Some("pb"), &names, false).unwrap();
        assert_eq!(unsorted.individual_names(), &["s10", "s2", "s1"]);
    }

    #[test]
    fn test_name_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.loc");
        let names = sample_names(&["pa", "pb", "s1"]);

        // population name constraints
        assert!(LocWriter::new(
            &path,
            "a_name_that_is_far_too_long",
            "CP",
            "pa",
            Some("pb"),
            &names,
            false
        )
        .is_err());
        assert!(
            LocWriter::new(&path, "two words", "CP", "pa", Some("pb"), &names, false).is_err()
        );

        // individual name constraints; parents are exempt
        let bad_child = sample_names(&["pa", "pb", "name with spaces"]);
        assert!(LocWriter::new(&path, "GBS", "CP", "pa", Some("pb"), &bad_child, false).is_err());
        let bad_parent = sample_names(&["parent a name ok", "pb", "s1"]);
        assert!(LocWriter::new(
            &path,
            "GBS",
            "CP",
            "parent a name ok",
            Some("pb"),
            &bad_parent,
            false
        )
        .is_ok());

        // validation failures must not create the output file
        assert!(!path.exists());
    }
}
