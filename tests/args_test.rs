//! Tests for command line tokenizing and classification

use rstest::rstest;

use cmdkit::CommandArgs;

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_two_tokens_with_marker_when_parsing_then_marker_is_positional() {
    let args = CommandArgs::parse_tokens(&["cmd", "--able"]);

    assert!(!args.has_flag("able"));
    assert_eq!(args.positional(), ["cmd", "--able"]);
}

#[test]
fn given_three_tokens_with_trailing_marker_when_parsing_then_flag_is_set() {
    let args = CommandArgs::parse_tokens(&["cmd", "a", "--able"]);

    assert!(args.has_flag("able"));
    assert_eq!(args.positional(), ["cmd", "a"]);
}

#[test]
fn given_marker_with_value_when_parsing_then_option_is_recorded() {
    let args = CommandArgs::parse_tokens(&["cmd", "a", "--divide", "->"]);

    assert_eq!(args.get_option("divide", "-"), "->");
    assert!(!args.has_flag("divide"));
    assert_eq!(args.positional(), ["cmd", "a"]);
}

#[test]
fn given_missing_option_when_getting_then_default_is_returned() {
    let args = CommandArgs::parse("string_str Hello World --able");

    assert_eq!(args.get_option("divide", "-"), "-");
}

#[test]
fn given_flag_followed_by_option_when_parsing_then_both_are_classified() {
    let args = CommandArgs::parse("string_str Hello World --able --divide ->");

    assert!(args.has_flag("able"));
    assert_eq!(args.get_option("divide", "-"), "->");
    assert_eq!(args.positional(), ["string_str", "Hello", "World"]);
    assert_eq!(args.arguments(), ["Hello", "World"]);
}

#[test]
fn given_option_value_between_positionals_when_parsing_then_order_is_kept() {
    let args = CommandArgs::parse("cp --mode fast src dst");

    assert_eq!(args.get_option("mode", ""), "fast");
    assert_eq!(args.positional(), ["cp", "src", "dst"]);
    assert_eq!(args.name(), Some("cp"));
}

#[test]
fn given_irregular_whitespace_when_parsing_then_runs_collapse() {
    let args = CommandArgs::parse("  log_str \t hello\n");

    assert_eq!(args.positional(), ["log_str", "hello"]);
}

#[rstest]
#[case("cmd\u{a0}x", &["cmd\u{a0}x"])]
#[case("log_str\u{2003}hi there", &["log_str\u{2003}hi", "there"])]
fn given_non_ascii_space_when_parsing_then_it_stays_inside_token(
    #[case] line: &str,
    #[case] expected: &[&str],
) {
    let args = CommandArgs::parse(line);

    assert_eq!(args.positional(), expected);
}

#[rstest]
#[case("")]
#[case("    ")]
#[case("\t\n")]
#[case("\u{0b}\u{0c}\r")]
fn given_blank_input_when_parsing_then_bundle_is_empty(#[case] line: &str) {
    let args = CommandArgs::parse(line);

    assert!(args.is_empty());
    assert!(args.positional().is_empty());
}

#[test]
fn given_any_marker_when_parsing_then_it_lands_in_flags_or_options() {
    let args = CommandArgs::parse("cmd --a --b x --c --d");

    assert!(args.has_flag("a"));
    assert_eq!(args.get_option("b", ""), "x");
    assert!(args.has_flag("c"));
    assert!(args.has_flag("d"));
    assert_eq!(args.flags().len() + args.options().len(), 4);
    assert_eq!(args.positional(), ["cmd"]);
}

#[rstest]
#[case(&["log_str", "hello"])]
#[case(&["cmd", "--able"])]
#[case(&["cmd", "a", "--able"])]
#[case(&["cmd", "a", "--divide", "->"])]
#[case(&["string_str", "Hello", "World", "--able", "--divide", "->"])]
#[case(&["cmd", "--k", "one", "--k", "two", "tail"])]
fn given_whitespace_free_tokens_when_parsing_joined_line_then_same_bundle(#[case] items: &[&str]) {
    let from_tokens = CommandArgs::parse_tokens(&tokens(items));
    let from_line = CommandArgs::parse(&items.join(" "));

    assert_eq!(from_tokens, from_line);
}

#[test]
fn given_owned_tokens_when_converting_then_matches_parse_tokens() {
    let owned = tokens(&["cmd", "a", "--able"]);
    let args = CommandArgs::from(owned.clone());

    assert_eq!(args, CommandArgs::parse_tokens(&owned));
    assert_eq!(CommandArgs::from("cmd a --able"), args);
}
