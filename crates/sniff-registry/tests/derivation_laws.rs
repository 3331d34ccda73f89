//! The derived views must agree with their base predicate for every input.

use sniff_registry::{Interface, InterfaceSet, Predicate, Registry};

struct Build {
    major: u32,
    debug: bool,
}

fn major_at_least(build: &Build, arg: Option<&str>) -> bool {
    match arg {
        Some(a) => a.parse::<u32>().map_or(false, |min| build.major >= min),
        None => true,
    }
}

fn major_is(build: &Build, arg: Option<&str>) -> bool {
    arg.and_then(|a| a.parse::<u32>().ok()) == Some(build.major)
}

fn debug(build: &Build, _arg: Option<&str>) -> bool {
    build.debug
}

fn registry() -> Registry<Build> {
    Registry::from_table(vec![
        Predicate::new("majorAtLeast", major_at_least),
        Predicate::new("majorIs", major_is)
            .with_interfaces(InterfaceSet::only(Interface::All).with(Interface::Any)),
        Predicate::new("debug", debug).not_only(),
    ])
    .unwrap()
}

fn builds() -> Vec<Build> {
    vec![
        Build { major: 0, debug: false },
        Build { major: 3, debug: true },
        Build { major: 12, debug: false },
    ]
}

const ARGS: [&str; 6] = ["0", "3", "4", "12", "x", ""];

#[test]
fn test_not_is_complement() {
    let registry = registry();

    for build in builds() {
        for name in registry.not().names() {
            for arg in ARGS.iter().map(|a| Some(*a)).chain([None]) {
                let base = registry.check(name, &build, arg).unwrap();
                assert_eq!(registry.not().check(name, &build, arg), Some(!base), "{name}({arg:?})");
            }
        }
    }
}

#[test]
fn test_all_and_any_fold_over_arguments() {
    let registry = registry();

    for build in builds() {
        for name in registry.all().names() {
            for window in ARGS.windows(3) {
                let results: Vec<bool> = window
                    .iter()
                    .map(|a| registry.check(name, &build, Some(*a)).unwrap())
                    .collect();

                assert_eq!(
                    registry.all().check(name, &build, window),
                    Some(results.iter().all(|r| *r)),
                    "all.{name}({window:?})"
                );
                assert_eq!(
                    registry.any().check(name, &build, window),
                    Some(results.iter().any(|r| *r)),
                    "any.{name}({window:?})"
                );
            }
        }
    }
}

#[test]
fn test_single_argument_is_one_element_sequence() {
    let registry = registry();
    let build = Build { major: 3, debug: true };

    for arg in ARGS {
        let base = registry.check("majorIs", &build, Some(arg));
        assert_eq!(registry.all().check("majorIs", &build, &[arg]), base);
        assert_eq!(registry.any().check("majorIs", &build, &[arg]), base);
    }
}

#[test]
fn test_empty_input() {
    let registry = registry();

    for build in builds() {
        for name in registry.all().names() {
            assert_eq!(registry.all().check(name, &build, &[]), Some(true));
            assert_eq!(registry.any().check(name, &build, &[]), Some(false));
        }
    }
}

#[test]
fn test_membership_follows_interface_sets() {
    let registry = registry();

    for predicate in registry.predicates() {
        assert_eq!(registry.not().contains(predicate.name()), predicate.supports(Interface::Not));
        assert_eq!(registry.all().contains(predicate.name()), predicate.supports(Interface::All));
        assert_eq!(registry.any().contains(predicate.name()), predicate.supports(Interface::Any));
    }
    assert!(!registry.not().contains("majorIs"));
}
