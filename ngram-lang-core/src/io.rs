use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Lines of a reader, decoded lossily.
///
/// Malformed UTF-8 sequences become `U+FFFD`, so a stray Latin-1 byte does not
/// hide the ASCII letters around it. Only genuine read failures are errors.
pub(crate) struct LossyLines<R> {
	reader: R,
	buffer: Vec<u8>,
}

impl<R: BufRead> Iterator for LossyLines<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		self.buffer.clear();
		match self.reader.read_until(b'\n', &mut self.buffer) {
			Ok(0) => None,
			Ok(_) => {
				if self.buffer.ends_with(b"\n") {
					self.buffer.pop();
					if self.buffer.ends_with(b"\r") {
						self.buffer.pop();
					}
				}
				Some(Ok(String::from_utf8_lossy(&self.buffer).into_owned()))
			}
			Err(e) => Some(Err(e)),
		}
	}
}

/// Opens a text file and returns a lazy iterator over its lines.
///
/// - Lines are read on demand, the file is never fully loaded
/// - Splits on `\n` / `\r\n`
/// - Invalid UTF-8 is replaced, not reported
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<LossyLines<BufReader<File>>> {
	Ok(LossyLines { reader: BufReader::new(File::open(filename)?), buffer: Vec::new() })
}

/// Extracts the last component of a path.
///
/// Examples:
/// - `"./corpus/englishTxt"` → `"englishTxt"`
/// - `"doc.txt"` → `"doc.txt"`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let name = input_path
		.as_ref()
		.file_name()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(name.to_string_lossy().to_string())
}

/// Lists the subdirectories of a directory, sorted by path.
pub(crate) fn list_dirs<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
	let mut dirs = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_dir() {
			dirs.push(path);
		}
	}

	dirs.sort();
	Ok(dirs)
}

/// Lists the files with a given extension directly inside a directory, sorted by path.
///
/// An empty `extension` accepts every file.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && (extension.is_empty() || path.extension() == Some(std::ffi::OsStr::new(extension))) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}
