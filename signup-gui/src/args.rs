//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::dir::SignupDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(SignupDirectory),
    ApiUrl(String),
}

/// Parse command-line arguments.
///
/// # Arguments
/// - `args`: Command-line arguments (including program name at args[0])
/// - `version`: Version to display for --version flag
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("branch-signup");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of the data directory
    --api-url <URL>     Base url of the signup api, overrides the configuration file
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--datadir" => {
                let path = iter.next().ok_or("missing arg to --datadir")?;
                res.push(Arg::DatadirPath(SignupDirectory::new(PathBuf::from(path))));
            }
            "--api-url" => {
                let url = iter.next().ok_or("missing arg to --api-url")?;
                res.push(Arg::ApiUrl(url.to_string()));
            }
            _ => return Err(format!("unknown argument: {}", arg).into()),
        }
    }

    Ok(res)
}

/// Returns the data directory given on the command line, if any.
pub fn datadir(args: &[Arg]) -> Option<SignupDirectory> {
    args.iter().rev().find_map(|a| match a {
        Arg::DatadirPath(dir) => Some(dir.clone()),
        _ => None,
    })
}

/// Returns the api url given on the command line, if any.
pub fn api_url(args: &[Arg]) -> Option<String> {
    args.iter().rev().find_map(|a| match a {
        Arg::ApiUrl(url) => Some(url.clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "1.0.0";

    fn split(s: &str) -> Vec<String> {
        s.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(split("app --meth"), VERSION).is_err());
        assert!(parse_args(split("app --datadir"), VERSION).is_err());
        assert!(parse_args(split("app --api-url"), VERSION).is_err());
        assert_eq!(Some(vec![]), parse_args(split("app"), VERSION).ok());
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(SignupDirectory::new(PathBuf::from("hello"))),
                Arg::ApiUrl("http://localhost:9000".to_string()),
            ]),
            parse_args(
                split("app --datadir hello --api-url http://localhost:9000"),
                VERSION
            )
            .ok()
        );
    }

    #[test]
    fn last_occurrence_wins() {
        let args = parse_args(
            split("app --api-url http://a --datadir one --api-url http://b"),
            VERSION,
        )
        .unwrap();
        assert_eq!(api_url(&args), Some("http://b".to_string()));
        assert_eq!(
            datadir(&args),
            Some(SignupDirectory::new(PathBuf::from("one")))
        );
        assert_eq!(api_url(&[]), None);
        assert_eq!(datadir(&[]), None);
    }
}
