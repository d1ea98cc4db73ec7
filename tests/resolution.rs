use clom::{
    ArgumentStore, Converter, Double, Error, Float, Int, List, Parsed, Parser, ParserOptions, Text,
    bind, bind_flag, custom, global_store, init_store, is_present, resolve,
};

fn store(tokens: &[&str]) -> ArgumentStore {
    ArgumentStore::new(tokens.iter().copied())
}

fn all_kinds() -> Parser {
    Parser::with_options(ParserOptions {
        help_aliases: vec!["help".to_string(), "h".to_string()],
        strict: false,
    })
    .string("word", &["--word", "-w"], "hello", "a greeting")
    .string_vec("words", &["--words", "-ws"], "hello hallo hola hej", "a list of greetings in different languages")
    .int("number", &["--number", "-n"], "3", "an integer")
    .int_vec("numbers", &["--numbers", "-ns"], "42 36 1", "a list of integers")
    .float("floaty", &["--floaty", "-f"], "1.0f", "a number")
    .float_vec("floaties", &["--floaties", "-fs"], "0.5f 2.33f", "a list of numbers")
    .double("constant", &["--constant", "-c"], "0.0000000000000000001602", "a mathematical or physical constant")
    .double_vec("constants", &["--constants", "-cs"], "3.1415 2.7182 9.81", "a list of mathematical or physical constants")
    .custom("letter", &["--letter", "-l"], "A", "any letter or other character", custom("a character", |s: &str| s.chars().next()))
    .flag("banner", &["--banner", "-b"], "whether the banner is shown")
}

#[test]
fn defaults_for_every_kind() {
    let resolved = all_kinds().resolve_all(&store(&["./a.out"])).unwrap();
    assert_eq!(resolved.get::<String>("word").unwrap(), "hello");
    assert_eq!(
        resolved.get::<Vec<String>>("words").unwrap(),
        ["hello", "hallo", "hola", "hej"]
    );
    assert_eq!(resolved.get::<i32>("number").unwrap(), 3);
    assert_eq!(resolved.get::<Vec<i32>>("numbers").unwrap(), [42, 36, 1]);
    assert_eq!(resolved.get::<f32>("floaty").unwrap(), 1.0);
    assert_eq!(resolved.get::<Vec<f32>>("floaties").unwrap(), [0.5f32, 2.33]);
    assert_eq!(resolved.get::<f64>("constant").unwrap(), 1.602e-19);
    assert_eq!(
        resolved.get::<Vec<f64>>("constants").unwrap(),
        [3.1415, 2.7182, 9.81]
    );
    assert_eq!(resolved.custom::<char>("letter").unwrap(), &'A');
    assert!(!resolved.get::<bool>("banner").unwrap());
}

#[test]
fn long_and_short_forms_resolve_the_same() {
    let long = store(&[
        "./a.out", "--word", "hi", "--words", "what_up wie_gehts", "--number", "5", "--numbers",
        "3 2 1 3", "--floaty", "0.1234", "--floaties", "0.3 2.0 1.5 3.2", "--constant", "1.0",
        "--constants", "0.0 0.5", "--letter", "B", "--banner",
    ]);
    let short = store(&[
        "./a.out", "-w", "hi", "-ws", "what_up wie_gehts", "-n", "5", "-ns", "3 2 1 3", "-f",
        "0.1234", "-fs", "0.3 2.0 1.5 3.2", "-c", "1.0", "-cs", "0.0 0.5", "-l", "B", "-b",
    ]);

    for tokens in [long, short] {
        let resolved = all_kinds().resolve_all(&tokens).unwrap();
        assert_eq!(resolved.get::<String>("word").unwrap(), "hi");
        assert_eq!(
            resolved.get::<Vec<String>>("words").unwrap(),
            ["what_up", "wie_gehts"]
        );
        assert_eq!(resolved.get::<i32>("number").unwrap(), 5);
        assert_eq!(resolved.get::<Vec<i32>>("numbers").unwrap(), [3, 2, 1, 3]);
        assert_eq!(resolved.get::<f32>("floaty").unwrap(), 0.1234);
        assert_eq!(
            resolved.get::<Vec<f32>>("floaties").unwrap(),
            [0.3f32, 2.0, 1.5, 3.2]
        );
        assert_eq!(resolved.get::<f64>("constant").unwrap(), 1.0);
        assert_eq!(resolved.get::<Vec<f64>>("constants").unwrap(), [0.0, 0.5]);
        assert_eq!(resolved.custom::<char>("letter").unwrap(), &'B');
        assert!(resolved.get::<bool>("banner").unwrap());
    }
}

#[test]
fn help_lists_every_setting_in_order() {
    let err = all_kinds()
        .resolve_all(&store(&["./a.out", "-n", "five", "-fs", "x", "help"]))
        .unwrap_err();
    let listing = match err {
        Error::HelpRequested(listing) => listing,
        other => panic!("expected help, got {other:?}"),
    };
    let names: Vec<&str> = listing.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "word", "words", "number", "numbers", "floaty", "floaties", "constant", "constants",
            "letter", "banner",
        ]
    );
    assert!(listing.to_string().starts_with("word: a greeting\n"));
    assert_eq!(Error::HelpRequested(listing).exit_code(), 0);
}

#[test]
fn subject_scenario() {
    let s = store(&["--name", "Mark", "--height", "5.2", "--smart"]);
    assert_eq!(bind(&s, &["--name", "-n"], "Mr X", "", &Text).unwrap().value, "Mark");
    assert_eq!(bind(&s, &["--height", "-h"], "6.0", "", &Float).unwrap().value, 5.2);
    assert!(bind_flag(&s, &["--smart", "-s"], "").value);
}

#[test]
fn fruits_scenario() {
    let s = store(&["--favorite-fruits", "mango orange"]);
    let fruits = bind(
        &s,
        &["--favorite-fruits", "-ff"],
        "apple banana cherry",
        "",
        &List(Text),
    )
    .unwrap();
    assert_eq!(fruits.value, ["mango", "orange"]);
}

#[test]
fn resolution_properties() {
    let aliases = ["--x", "-x"];
    // No alias present: the default, verbatim.
    assert_eq!(resolve(&store(&["a", "b", "--y", "1"]), &aliases, "d e f").unwrap(), "d e f");
    // First occurrence of any alias wins.
    assert_eq!(resolve(&store(&["a", "-x", "1", "--x", "2"]), &aliases, "d").unwrap(), "1");
    // Trailing alias is an error, not a default.
    assert!(matches!(
        resolve(&store(&["a", "--x"]), &aliases, "d"),
        Err(Error::MissingValue { .. })
    ));
    // Presence is independent of position.
    let cases: [&[&str]; 4] = [&["-x"], &["a", "-x"], &["-x", "a"], &["a", "-x", "b"]];
    for tokens in cases {
        assert!(is_present(&store(tokens), &aliases));
    }
    assert!(!is_present(&store(&["a", "--xx"]), &aliases));
}

#[test]
fn vector_round_trip() {
    let ints = ["7", "-3", "0", "7", "2147483647"];
    let expected: Vec<i32> = ints.iter().map(|t| Int.convert(t).unwrap()).collect();
    assert_eq!(List(Int).convert(&ints.join(" ")).unwrap(), expected);

    let doubles = ["1e-3", "2.5", "-0.125"];
    let expected: Vec<f64> = doubles.iter().map(|t| Double.convert(t).unwrap()).collect();
    assert_eq!(List(Double).convert(&doubles.join(" ")).unwrap(), expected);
}

#[test]
fn scalar_conversions() {
    assert_eq!(Int.convert("42").unwrap(), 42);
    match Int.convert("abc") {
        Err(Error::Conversion { raw, expected }) => {
            assert_eq!(raw, "abc");
            assert_eq!(expected, "an integer");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(Parsed::<u16>::new().convert("8080").unwrap(), 8080);
    assert_eq!(Error::conversion("abc", "an integer").exit_code(), 1);
}

#[test]
fn process_wide_store_from_the_crate_root() {
    assert!(matches!(global_store(), Err(Error::Uninitialized)));
    let stored = init_store(store(&["prog", "--number", "9"])).unwrap();
    assert_eq!(stored.len(), 3);
    assert!(matches!(
        init_store(store(&["prog"])),
        Err(Error::AlreadyInitialized)
    ));

    let resolved = all_kinds().resolve_all(global_store().unwrap()).unwrap();
    assert_eq!(resolved.get::<i32>("number").unwrap(), 9);
}
