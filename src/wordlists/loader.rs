//! Word list loading
//!
//! Reads replacement word lists from plain text files, one word per line.
//! Blank lines and surrounding whitespace are ignored; words are normalized
//! to lowercase.

use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file
///
/// Keeps only entries of the expected length after normalization, so a list
/// with stray headers or over-length lines degrades gracefully.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = trimmed.to_ascii_lowercase();
            (word.len() == word_length && word.bytes().all(|b| b.is_ascii_lowercase()))
                .then_some(word)
        })
        .collect();

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn list_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_normalizes_words() {
        let file = list_file("crane\nSLATE\n  irate  \n");

        let words = load_from_file(file.path(), 5).unwrap();

        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let file = list_file("crane\n\n# header\ntoolong\nab\nslate\n");

        let words = load_from_file(file.path(), 5).unwrap();

        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/no/such/wordlist.txt", 5).is_err());
    }
}
