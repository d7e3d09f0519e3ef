use clap::{App, Arg, SubCommand};

mod command_vote;

fn main() {
    let matches = App::new("VoteCrypt CLI")
        .version("0.1")
        .about("Encrypts ballots for a homomorphically tallied election")
        .subcommand(
            SubCommand::with_name("vote")
                .about("Encrypt a one-hot ballot and print its wire form")
                .arg(
                    Arg::with_name("KEY")
                        .index(1)
                        .required(true)
                        .help("Election public key file in JSON format: {\"n\": \"...\", \"g\": \"...\"}"),
                )
                .arg(
                    Arg::with_name("candidates")
                        .long("candidates")
                        .takes_value(true)
                        .required(true)
                        .help("Number of candidates on the ballot"),
                )
                .arg(
                    Arg::with_name("choice")
                        .long("choice")
                        .takes_value(true)
                        .required(true)
                        .help("Chosen candidate index, counting from 0"),
                ),
        )
        .get_matches();

    // Subcommands
    if let Some(matches) = matches.subcommand_matches("vote") {
        command_vote::command_vote(matches);
    }
}
