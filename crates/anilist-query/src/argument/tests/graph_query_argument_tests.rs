use crate::QueryBuildError;
use crate::QueryBuildErrorKind;
use crate::argument::ArgumentClass;
use crate::argument::ArgumentValue;
use crate::argument::ArgumentValueKind;
use crate::argument::GraphQueryArgument;
use crate::arguments::StaffQueryArguments;
use crate::enums::StaffLanguage;

#[test]
fn construction_defers_type_checking() {
    let argument = GraphQueryArgument::new(
        "id",
        ArgumentClass::Staff,
        ArgumentValueKind::Int,
        "not an int",
    );

    assert_eq!(argument.name(), "id");
    assert_eq!(argument.owner(), ArgumentClass::Staff);
    assert_eq!(argument.value(), &ArgumentValue::String("not an int".to_string()));

    let err = argument.is_valid_argument_type().unwrap_err();
    assert_eq!(err.kind(), QueryBuildErrorKind::ArgumentType);
    assert_eq!(
        err.to_string(),
        "Query argument (id) expects a value of type Int but was given a value \
        of type String.",
    );
}

#[test]
fn enum_mismatch_names_both_types() {
    let argument = GraphQueryArgument::new(
        "language",
        ArgumentClass::Staff,
        ArgumentValueKind::Enum("StaffLanguage"),
        vec![1, 2],
    );

    assert_eq!(argument.is_valid_argument_type(), Err(QueryBuildError::ArgumentType {
        argument_name: "language".to_string(),
        expected: ArgumentValueKind::Enum("StaffLanguage"),
        actual: "[Int]".to_string(),
    }));
}

#[test]
fn typed_constructors_produce_valid_arguments() {
    let staff_args = StaffQueryArguments::new();
    let arguments = [
        staff_args.id(95),
        staff_args.search("Hanazawa"),
        staff_args.language(StaffLanguage::Japanese),
        staff_args.sort(vec![]),
    ];

    for argument in &arguments {
        assert_eq!(argument.owner(), ArgumentClass::Staff);
        assert!(argument.is_valid_argument_type().is_ok());
    }
}

#[test]
fn identical_arguments_are_not_deduplicated() {
    let staff_args = StaffQueryArguments::new();
    let first = staff_args.id(1);
    let second = staff_args.id(1);

    assert_eq!(first, second);
    let rendered: Vec<String> =
        [first, second].iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["id: 1", "id: 1"]);
}
