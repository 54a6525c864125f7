//! CLI argument parsing tests.

use clap::Parser;
use zohobooks::cli::{Cli, Command, Entity};

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["zohobooks", "get", "contact", "460000000026049"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::Contact);
            assert_eq!(id, "460000000026049");
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_list_subcommand() {
    let cli = Cli::parse_from(["zohobooks", "list", "invoices"]);

    match cli.command {
        Command::List {
            entity,
            page,
            per_page,
            to,
            all,
            search,
        } => {
            assert_eq!(entity, Entity::Invoice);
            assert_eq!(page, None);
            assert_eq!(per_page, None);
            assert_eq!(to, None);
            assert!(!all);
            assert_eq!(search, None);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_cli_parses_delete_subcommand() {
    let cli = Cli::parse_from(["zohobooks", "delete", "bill", "7"]);

    match cli.command {
        Command::Delete { entity, id } => {
            assert_eq!(entity, Entity::Bill);
            assert_eq!(id, "7");
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn test_global_json_flag() {
    let before = Cli::parse_from(["zohobooks", "--json", "get", "item", "1"]);
    assert!(before.json);

    let after = Cli::parse_from(["zohobooks", "get", "item", "1", "--json"]);
    assert!(after.json);
}

#[test]
fn test_list_pagination_args() {
    let cli = Cli::parse_from([
        "zohobooks",
        "list",
        "contacts",
        "--page",
        "2",
        "--per-page",
        "50",
        "--to",
        "4",
        "--search",
        "bowman",
    ]);

    match cli.command {
        Command::List {
            page,
            per_page,
            to,
            search,
            ..
        } => {
            assert_eq!(page, Some(2));
            assert_eq!(per_page, Some(50));
            assert_eq!(to, Some(4));
            assert_eq!(search.as_deref(), Some("bowman"));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_all_flag() {
    let cli = Cli::parse_from(["zohobooks", "list", "items", "--all"]);

    match cli.command {
        Command::List { all, .. } => assert!(all),
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_to_conflicts_with_all() {
    let result = Cli::try_parse_from(["zohobooks", "list", "contacts", "--all", "--to", "3"]);
    assert!(result.is_err());
}

#[test]
fn test_page_and_per_page_conflict_with_all() {
    let page = Cli::try_parse_from(["zohobooks", "list", "contacts", "--all", "--page", "2"]);
    assert!(page.is_err());

    let per_page =
        Cli::try_parse_from(["zohobooks", "list", "contacts", "--all", "--per-page", "50"]);
    assert!(per_page.is_err());
}

#[test]
fn test_page_must_be_numeric() {
    let result = Cli::try_parse_from(["zohobooks", "list", "contacts", "--page", "two"]);
    assert!(result.is_err());
}

#[test]
fn test_entity_variants() {
    let cases = [
        ("contact", Entity::Contact),
        ("contacts", Entity::Contact),
        ("invoice", Entity::Invoice),
        ("invoices", Entity::Invoice),
        ("bill", Entity::Bill),
        ("bills", Entity::Bill),
        ("item", Entity::Item),
        ("items", Entity::Item),
    ];

    for (arg, expected) in cases {
        let cli = Cli::parse_from(["zohobooks", "get", arg, "1"]);
        match cli.command {
            Command::Get { entity, .. } => assert_eq!(entity, expected, "entity arg {arg}"),
            _ => panic!("Expected Get command"),
        }
    }
}

#[test]
fn test_unknown_entity_is_rejected() {
    let result = Cli::try_parse_from(["zohobooks", "get", "project", "1"]);
    assert!(result.is_err());
}
