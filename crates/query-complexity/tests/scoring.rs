use std::num::NonZeroU64;

use query_complexity::{argument_weight, Argument, ArgumentValue, FieldComplexityCalculator, PolicyDefinition};
use rstest::rstest;

fn policy() -> PolicyDefinition {
    PolicyDefinition::parse(r#"{"complexity": {"Query": {"list": 10}, "User": {"posts": 4}}}"#).unwrap()
}

#[rstest]
#[case::no_arguments(vec![], 0, 1)]
#[case::no_arguments_with_children(vec![], 9, 10)]
#[case::single_limit(vec![Argument::new("limit", 3)], 4, 15)]
#[case::summed_arguments(vec![Argument::new("a", 5), Argument::new("b", 3)], 1, 16)]
#[case::mixed_sign_arguments(vec![Argument::new("first", 10), Argument::new("offset", -5)], 2, 15)]
#[case::negative_total(vec![Argument::new("first", -10), Argument::new("offset", 4)], 3, 0)]
fn unweighted_fields(#[case] arguments: Vec<Argument>, #[case] child_complexity: u64, #[case] expected: u64) {
    let calculator = FieldComplexityCalculator::new(policy());
    let score = calculator.score("name", "User", &arguments, child_complexity);

    assert_eq!(score, argument_weight(&arguments) * (1 + child_complexity));
    assert_eq!(score, expected);
}

#[rstest]
#[case("Query", "list", vec![Argument::new("first", 4)], 2, 48)]
#[case("Query", "list", vec![], 0, 10)]
#[case("User", "posts", vec![Argument::new("first", 2)], 3, 14)]
#[case("Post", "list", vec![], 0, 1)]
fn weighted_fields(
    #[case] parent_type: &str,
    #[case] field_name: &str,
    #[case] arguments: Vec<Argument>,
    #[case] child_complexity: u64,
    #[case] expected: u64,
) {
    let calculator = FieldComplexityCalculator::new(policy());

    assert_eq!(
        calculator.score(field_name, parent_type, &arguments, child_complexity),
        expected
    );
}

#[test]
fn empty_argument_list_weighs_one_whatever_the_children() {
    for child_complexity in [0, 1, 50, 10_000] {
        assert_eq!(argument_weight(&[]), 1);
        assert_eq!(
            FieldComplexityCalculator::default().score("f", "T", &[], child_complexity),
            1 + child_complexity
        );
    }
}

// Kept as is: a field whose arguments carry no integer scores 0, unlike a
// field without any arguments.
#[test]
fn non_integer_only_arguments_score_zero() {
    let arguments = vec![
        Argument::new("filter", "name = 'x'"),
        Argument::new("orderBy", ArgumentValue::Enum("ASC".into())),
    ];

    assert_eq!(argument_weight(&arguments), 0);
    assert_eq!(FieldComplexityCalculator::new(policy()).score("list", "Query", &arguments, 12), 0);
}

#[test]
fn scoring_is_idempotent() {
    let calculator = FieldComplexityCalculator::new(policy());
    let arguments = vec![Argument::new("first", 7), Argument::new("after", "cursor")];

    let first = calculator.score("posts", "User", &arguments, 11);
    let second = calculator.score("posts", "User", &arguments, 11);

    assert_eq!(first, second);
    assert_eq!(first, 7 * (4 + 11));
}

#[test]
fn absent_policy_defaults_every_lookup() {
    let loaded = PolicyDefinition::load(None);
    let calculator = FieldComplexityCalculator::new(loaded.policy);

    assert!(calculator.policy().is_empty());
    assert_eq!(calculator.score("list", "Query", &[Argument::new("first", 4)], 2), 12);
}

#[test]
fn programmatic_policy_matches_parsed_policy() {
    let built = PolicyDefinition::default()
        .with_weight("Query", "list", NonZeroU64::new(10).unwrap())
        .with_weight("User", "posts", NonZeroU64::new(4).unwrap());

    assert_eq!(built, policy());
}
