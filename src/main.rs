// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DHL API Logger CLI
//!
//! Sends requests through the logging client and inspects URLs.

use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use dhl_api_logger::{
    is_monitored, redact_url, ApiLogger, HttpClient, HttpClientConfig, LocalClock, Outcome,
    RequestArgs, TracingSink,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "dhl_api_logger=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: dhl-api-logger fetch <url> [OPTIONS]");
                return ExitCode::from(1);
            }
            match parse_fetch_args(&args[3..]) {
                Ok(request) => fetch_url(&args[2], request).await,
                Err(e) => {
                    eprintln!("{:#}", e);
                    ExitCode::from(1)
                }
            }
        }
        "classify" => {
            if args.len() < 3 {
                eprintln!("Usage: dhl-api-logger classify <url>");
                return ExitCode::from(1);
            }
            let url = &args[2];
            if is_monitored(url) {
                println!("monitored: {}", redact_url(url));
            } else {
                println!("not monitored: {}", redact_url(url));
            }
            ExitCode::SUCCESS
        }
        "redact-url" => {
            if args.len() < 3 {
                eprintln!("Usage: dhl-api-logger redact-url <url>");
                return ExitCode::from(1);
            }
            println!("{}", redact_url(&args[2]));
            ExitCode::SUCCESS
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("dhl-api-logger {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"DHL API Logger - capture and redact Starshipit DHL API traffic

USAGE:
    dhl-api-logger <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>         Send a request and log it if it is monitored
    classify <url>      Check whether a URL is monitored
    redact-url <url>    Print a URL with its apiKey masked
    help                Show this help message
    version             Show version information

FETCH OPTIONS:
    --method <METHOD>         HTTP method (default GET)
    --header <NAME:VALUE>     Request header, repeatable
    --body <BODY>             Request body
    --timeout <SECS>          Timeout in seconds (default 30)

EXAMPLES:
    dhl-api-logger fetch "https://api.starshipit.com/api/rates/DHL?apiKey=KEY"
    dhl-api-logger fetch https://api.starshipit.com/api/rates/DHL \
        --method POST --header "StarShipIT-Api-Key:KEY" --body '{{"weight":2}}'
    dhl-api-logger classify https://api.starshipit.com/v2/DHL/rates

Log verbosity follows RUST_LOG (default dhl_api_logger=info).
"#
    );
}

fn parse_fetch_args(options: &[String]) -> anyhow::Result<RequestArgs> {
    let mut request = RequestArgs::new();
    let mut iter = options.iter();

    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| anyhow!("Missing value for {}", flag))
        };
        match flag.as_str() {
            "--method" | "-X" => request = request.method(value()?.to_uppercase()),
            "--header" | "-H" => {
                let raw = value()?;
                let (name, val) = raw
                    .split_once(':')
                    .ok_or_else(|| anyhow!("Header must be NAME:VALUE, got '{}'", raw))?;
                request = request.header(name.trim(), val.trim());
            }
            "--body" | "-d" => request = request.body(value()?.as_str()),
            "--timeout" => {
                let raw = value()?;
                let secs: f64 = raw
                    .parse()
                    .with_context(|| format!("Invalid timeout '{}'", raw))?;
                request = request.timeout(secs);
            }
            other => bail!("Unknown option: {}", other),
        }
    }

    Ok(request)
}

async fn fetch_url(url: &str, request: RequestArgs) -> ExitCode {
    println!("Fetching: {}", redact_url(url));

    let config = HttpClientConfig::default();
    let logger = match ApiLogger::with_config(config.logger_config(), TracingSink, LocalClock) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Invalid logger configuration: {}", e);
            return ExitCode::from(1);
        }
    };

    let client = match HttpClient::with_config(config) {
        Ok(c) => c.with_hooks(logger),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    if !is_monitored(url) {
        println!("Note: URL is not monitored, nothing will be logged");
    }

    match client.execute(url, request).await {
        Outcome::Success(response) => {
            println!("\n=== Response ===");
            println!("Status: {}", response.status);
            println!("Size: {} bytes", response.body.len());
            ExitCode::SUCCESS
        }
        Outcome::Failure(err) => {
            eprintln!("Request failed: {}", err);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_fetch_args() {
        let request = parse_fetch_args(&strings(&[
            "--method",
            "post",
            "-H",
            "X-Api-Key: k",
            "--body",
            "{}",
            "--timeout",
            "5",
        ]))
        .unwrap();

        assert_eq!(request.method_or_default(), "POST");
        assert_eq!(request.header_value("x-api-key"), Some("k"));
        assert_eq!(request.body.as_deref(), Some("{}"));
        assert_eq!(request.timeout, Some(5.0));
    }

    #[test]
    fn test_parse_fetch_args_errors() {
        assert!(parse_fetch_args(&strings(&["--method"])).is_err());
        assert!(parse_fetch_args(&strings(&["--header", "novalue"])).is_err());
        assert!(parse_fetch_args(&strings(&["--timeout", "soon"])).is_err());
        assert!(parse_fetch_args(&strings(&["--verbose"])).is_err());
    }
}
