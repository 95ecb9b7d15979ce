use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_aggregate_args() {
    let cli = Cli::try_parse_from([
        "jp",
        "aggregate",
        "--root",
        "Customer",
        "orders.items",
        "--expr",
        "sum(items.price)",
        "--leaf-first",
    ])
    .unwrap();
    match cli.command {
        Commands::Aggregate(args) => {
            assert_eq!(args.root, "Customer");
            assert_eq!(args.path, "orders.items");
            assert_eq!(args.expr, "sum(items.price)");
            assert!(args.leaf_first);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_global_args_after_subcommand() {
    let cli = Cli::try_parse_from([
        "jp",
        "resolve",
        "-r",
        "Post",
        "tags",
        "--dialect",
        "postgres",
        "-o",
        "json",
        "-v",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.global.dialect.as_deref(), Some("postgres"));
    assert_eq!(cli.global.project_dir, ".");
    match cli.command {
        Commands::Resolve(args) => assert_eq!(args.output, ResolveOutput::Json),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_join_select_repeats() {
    let cli = Cli::try_parse_from([
        "jp", "join", "--root", "Post", "tags", "-s", "tags.id", "-s", "posts.id",
    ])
    .unwrap();
    match cli.command {
        Commands::Join(args) => assert_eq!(args.select, vec!["tags.id", "posts.id"]),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_aggregate_requires_expr() {
    assert!(Cli::try_parse_from(["jp", "aggregate", "--root", "Customer", "orders"]).is_err());
}
