use camino::Utf8PathBuf as PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Counts how many magic numbers exist in a dataset")]
pub struct Args {
    /// A file to load the dataset from. The dataset must be a JSON array of [A, B] pairs
    #[clap(short = 'f', long = "file", env = "MAGICNUMBER_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// A JSON string with the dataset, e.g. "[[1,3], [50, 10982]]"
    #[clap(short = 's', long = "json", value_name = "JSON")]
    pub json: Option<String>,

    /// Read the dataset from this file instead of the standard input ("-" for stdin)
    #[clap(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[clap(long, env, hide(true))]
    pub log_span_durations: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin(String),
    Json(String),
    File(PathBuf),
}

impl Args {
    /// Whether stdin has to be read before choosing a source.
    pub fn reads_stdin(&self, stdin_is_terminal: bool) -> bool {
        match &self.input {
            Some(path) => path.as_str() == "-",
            None => !stdin_is_terminal,
        }
    }

    // An INPUT file wins, then non-blank stdin, then -s, then -f
    pub fn source(&self, stdin: Option<String>) -> Option<Source> {
        if let Some(path) = self.input.as_ref().filter(|path| path.as_str() != "-") {
            return Some(Source::File(path.clone()));
        }
        if let Some(content) = stdin.filter(|content| !content.trim().is_empty()) {
            return Some(Source::Stdin(content));
        }
        if let Some(json) = self.json.as_ref().filter(|json| !json.is_empty()) {
            return Some(Source::Json(json.clone()));
        }
        self.file.clone().map(Source::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("calcmagicnumber").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_source() {
        assert_eq!(parse(&[]).source(None), None);
        assert_eq!(parse(&["-s", ""]).source(None), None);
    }

    #[test]
    fn test_source_precedence() {
        assert_eq!(
            parse(&["-s", "[[0, 10]]"]).source(None),
            Some(Source::Json("[[0, 10]]".to_owned()))
        );
        assert_eq!(
            parse(&["-f", "dataset.json"]).source(None),
            Some(Source::File("dataset.json".into()))
        );
        assert_eq!(
            parse(&["-f", "dataset.json", "-s", "[]"]).source(None),
            Some(Source::Json("[]".to_owned()))
        );
        assert_eq!(
            parse(&["-f", "dataset.json", "-s", "[]"]).source(Some("[[1, 4]]".to_owned())),
            Some(Source::Stdin("[[1, 4]]".to_owned()))
        );
        assert_eq!(
            parse(&["-s", "[]", "other.json"]).source(Some("[[1, 4]]".to_owned())),
            Some(Source::File("other.json".into()))
        );
    }

    #[test]
    fn test_empty_stdin_falls_through() {
        assert_eq!(
            parse(&["-f", "dataset.json"]).source(Some(String::new())),
            Some(Source::File("dataset.json".into()))
        );
        assert_eq!(
            parse(&["-s", "[[0,10]]"]).source(Some(String::new())),
            Some(Source::Json("[[0,10]]".to_owned()))
        );
        assert_eq!(parse(&[]).source(Some(String::new())), None);
        assert_eq!(parse(&["-"]).source(Some(" \n".to_owned())), None);
    }

    #[test]
    fn test_reads_stdin() {
        assert!(parse(&[]).reads_stdin(false));
        assert!(!parse(&[]).reads_stdin(true));
        assert!(parse(&["-"]).reads_stdin(true));
        assert!(!parse(&["other.json"]).reads_stdin(false));
    }

    #[test]
    fn test_missing_value() {
        assert!(Args::try_parse_from(["calcmagicnumber", "-f"]).is_err());
    }
}
