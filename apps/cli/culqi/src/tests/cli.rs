// Unit tests for argument parsing

use crate::cli::{ChargeCommands, Cli, Commands, ConfigCommands, Host, parse_key_value};

use culqi_client::Credential;

use clap::Parser;

/// **VALUE**: Verifies list filters keep command-line order with `limit` first.
///
/// **BUG THIS CATCHES**: Would catch `--param` values being collected into a map,
/// which reorders the query string sent to Culqi.
#[test]
fn given_list_flags_when_parsed_then_query_preserves_order() {
    // GIVEN: A charge listing with a limit and two filters
    let cli = Cli::try_parse_from([
        "culqi",
        "charges",
        "list",
        "--limit",
        "5",
        "--param",
        "email=richard@piedpiper.com",
        "--param",
        "currency_code=PEN",
    ])
    .unwrap();

    // WHEN: Building the query
    let Commands::Charges {
        command: ChargeCommands::List(args),
    } = cli.command
    else {
        panic!("expected charges list");
    };
    let query = args.query();

    // THEN: Order matches the command line
    assert_eq!(
        query.encode(),
        "limit=5&email=richard%40piedpiper.com&currency_code=PEN"
    );
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_accepted() {
    let cli = Cli::try_parse_from([
        "culqi",
        "config",
        "show",
        "--config-dir",
        "/tmp/culqi",
        "-vv",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Show
        }
    ));
    assert_eq!(cli.config_dir.unwrap().to_str(), Some("/tmp/culqi"));
    assert_eq!(cli.verbosity, 2);
}

#[test]
fn given_raw_secure_when_parsed_then_uses_public_credential() {
    let cli = Cli::try_parse_from([
        "culqi",
        "raw",
        "secure",
        "POST",
        "tokens",
        "--body",
        r#"{"card_number":"4111111111111111"}"#,
    ])
    .unwrap();

    let Commands::Raw(args) = cli.command else {
        panic!("expected raw");
    };

    assert_eq!(args.host, Host::Secure);
    assert_eq!(args.host.credential(), Credential::Public);
    assert_eq!(args.method, "POST");
    assert!(args.body.is_some());
}

#[test]
fn given_unknown_host_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["culqi", "raw", "sandbox", "GET", "charges"]);

    assert!(result.is_err(), "Only api and secure hosts exist");
}

#[test]
fn given_param_without_equals_when_parsed_then_rejected() {
    assert!(parse_key_value("limit").is_err());
    assert!(parse_key_value("=5").is_err());
}

#[test]
fn given_param_value_with_equals_when_parsed_then_splits_on_first() {
    assert_eq!(
        parse_key_value("metadata=a=b"),
        Ok(("metadata".to_string(), "a=b".to_string()))
    );
}
