use votecrypt::{build_ballot, PublicKey};

pub fn command_vote(matches: &clap::ArgMatches) {
    let filename = match matches.value_of("KEY") {
        Some(filename) => filename,
        None => {
            eprintln!("votecrypt vote: key filename required");
            std::process::exit(1);
        }
    };

    let key_bytes = match std::fs::read(filename) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("votecrypt vote: unable to read {}: {}", filename, e);
            std::process::exit(1);
        }
    };

    let key: PublicKey = serde_json::from_slice(&key_bytes).unwrap_or_else(|e| {
        eprintln!("votecrypt vote: unable to parse key {}: {}", filename, e);
        std::process::exit(1);
    });

    let candidates = parse_count(matches, "candidates");
    let choice = parse_count(matches, "choice");

    let ballot = match build_ballot(choice, candidates, &key) {
        Ok(ballot) => ballot,
        Err(e) => {
            eprintln!("votecrypt vote: {}", e);
            std::process::exit(1);
        }
    };

    // The ordered decimal-string vector the voting server expects,
    // ready to be posted alongside the voter's token.
    let wire = serde_json::to_string(&ballot.to_decimal()).unwrap_or_else(|e| {
        eprintln!("votecrypt vote: unable to encode ballot: {}", e);
        std::process::exit(1);
    });
    println!("{}", wire);
}

fn parse_count(matches: &clap::ArgMatches, name: &str) -> usize {
    let raw = match matches.value_of(name) {
        Some(raw) => raw,
        None => {
            eprintln!("votecrypt vote: --{} is required", name);
            std::process::exit(1);
        }
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("votecrypt vote: --{} must be a non-negative integer", name);
            std::process::exit(1);
        }
    }
}
