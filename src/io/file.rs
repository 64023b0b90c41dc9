//! Input file handling with [`InputFile`].
//!
//! This abstracts over reading plaintext and gzip-compressed VCF input
//! through a common buffered interface. GBS pipelines commonly emit
//! `.vcf.gz`, so compression is detected from the gzip magic bytes rather
//! than the file extension.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

/// Check if a file is gzipped by looking for the magic numbers
fn is_gzipped_file(file_path: impl Into<PathBuf>) -> io::Result<bool> {
    let mut file = File::open(file_path.into())?;
    let mut buffer = [0; 2];
    // an input shorter than two bytes cannot be a gzip file (nor a VCF,
    // but that is the parser's problem)
    if file.read(&mut buffer)? < 2 {
        return Ok(false);
    }

    Ok(buffer == [0x1f, 0x8b])
}

/// Represents an input file.
///
/// This struct is used to handle operations on an input file, such as
/// reading from the file. This abstracts how data is read in, allowing
/// for both plaintext and gzip-compressed input to be read through a
/// common interface.
#[derive(Clone, Debug)]
pub struct InputFile {
    pub filepath: PathBuf,
}

impl InputFile {
    /// Constructs a new `InputFile`.
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    /// Opens the file and returns a buffered reader, transparently
    /// decompressing gzip input.
    pub fn reader(&self) -> io::Result<BufReader<Box<dyn Read>>> {
        let file = File::open(self.filepath.clone())?;
        let is_gzipped = is_gzipped_file(&self.filepath)?;
        let reader: Box<dyn Read> = if is_gzipped {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };
        Ok(BufReader::new(reader))
    }
}

#[cfg(test)]
mod tests {
    use super::InputFile;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Read, Write};

    #[test]
    fn test_reader_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.vcf");
        std::fs::write(&path, "##fileformat=VCFv4.2\n").unwrap();

        let mut contents = String::new();
        InputFile::new(&path)
            .reader()
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "##fileformat=VCFv4.2\n");
    }

    #[test]
    fn test_reader_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compressed.vcf.gz");
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"##fileformat=VCFv4.2\n").unwrap();
        encoder.finish().unwrap();

        let mut contents = String::new();
        InputFile::new(&path)
            .reader()
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "##fileformat=VCFv4.2\n");
    }
}
