use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("--secure and --seed cannot be combined")]
    ConflictingEntropy,
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--secure" => flags.secure = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => {
                // Validated later so a bad value reports like any other bad length.
                flags.length = Some(value(args, &mut i)?.to_string());
            }
            "-w" | "--words" => {
                flags.words.push(value(args, &mut i)?.to_string());
            }
            "-n" | "--number" => {
                let raw = value(args, &mut i)?;
                flags.number = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "--seed" => {
                let raw = value(args, &mut i)?;
                flags.seed = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "-o" | "--output" => {
                // Optional value; a following flag means "use the default file"
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if flags.secure && flags.seed.is_some() {
        return Err(ParseError::ConflictingEntropy);
    }

    Ok(flags)
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("wordpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn full_generation_flags() {
        let flags = parse(&args(&[
            "-l", "12", "-w", "cat,dog", "--words", "owl", "--no-special", "-n", "3", "-e",
        ]))
        .unwrap();
        assert_eq!(flags.length.as_deref(), Some("12"));
        assert_eq!(flags.words, vec!["cat,dog", "owl"]);
        assert!(flags.no_special);
        assert!(!flags.no_upper);
        assert_eq!(flags.number, Some(3));
        assert!(flags.entropy);
    }

    #[test]
    fn length_text_is_kept_raw() {
        let flags = parse(&args(&["--length", "twelve"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("twelve"));
    }

    #[test]
    fn bad_count_is_rejected() {
        assert_eq!(
            parse(&args(&["-n", "lots"])),
            Err(ParseError::InvalidNumber("lots".into()))
        );
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse(&args(&["-w"])),
            Err(ParseError::MissingValue("-w".into()))
        );
    }

    #[test]
    fn output_path_is_optional() {
        assert_eq!(
            parse(&args(&["-o", "-q"])).unwrap().output.as_deref(),
            Some(".")
        );
        assert_eq!(
            parse(&args(&["-o", "pw.txt"])).unwrap().output.as_deref(),
            Some("pw.txt")
        );
    }

    #[test]
    fn unknown_and_conflicting() {
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
        assert_eq!(
            parse(&args(&["--secure", "--seed", "4"])),
            Err(ParseError::ConflictingEntropy)
        );
    }

    #[test]
    fn switches_leave_generation_fields_unset() {
        let flags = parse(&args(&["-q", "-b", "--save"])).unwrap();
        assert!(flags.quiet && flags.clipboard && flags.save);
        assert_eq!(flags.length, None);
        assert!(flags.words.is_empty());
    }
}
