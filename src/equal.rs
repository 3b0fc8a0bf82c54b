use crate::{
    diagnostic::Diagnostic,
    reporter::Reporter,
    value::{Kind, Value},
};

#[track_caller]
fn check_kinds<R: Reporter + ?Sized>(
    reporter: &mut R,
    label: &str,
    expected: Kind,
    actual: Kind,
) -> bool {
    if expected == actual {
        return true;
    }

    let message = Diagnostic::new(&label)
        .field("Expected (type)", &expected)
        .field("Actual (type)", &actual);

    reporter.report_failure(format_args!("{message}"));
    false
}

/**
Check that `expected` and `actual` have the same [`Kind`].

The values themselves aren't compared. On a mismatch, the failure message
names both kinds:

```
use ut_asserts::{assert_equal_types, Recorder};

let mut recorder = Recorder::new();
assert!(assert_equal_types(&mut recorder, "same kind", true, false));
assert!(!assert_equal_types(&mut recorder, "UT Name", "", true));

assert_eq!(
    recorder.failures(),
    ["\nUT Name:         UT Name\nExpected (type): string\nActual (type):   bool"],
);
```
*/
#[track_caller]
pub fn assert_equal_types<'a, R: Reporter + ?Sized>(
    reporter: &mut R,
    label: &str,
    expected: impl Into<Value<'a>>,
    actual: impl Into<Value<'a>>,
) -> bool {
    check_kinds(reporter, label, expected.into().kind(), actual.into().kind())
}

/**
Check that `expected` and `actual` are equal.

The kinds are checked first, exactly like [`assert_equal_types`]; if they
differ, only the type mismatch is reported. Otherwise the values are
compared, and a mismatch reports both of them:

```
use ut_asserts::{assert_equal, Recorder};

let mut recorder = Recorder::new();
assert!(assert_equal(&mut recorder, "flag", true, true));
assert!(!assert_equal(&mut recorder, "UT Name", "Left", "Right"));
assert!(!assert_equal(&mut recorder, "width", 1u8, 1u16));

assert_eq!(
    recorder.failures(),
    [
        "\nUT Name:  UT Name\nExpected: Left\nActual:   Right",
        "\nUT Name:         width\nExpected (type): uint8\nActual (type):   uint16",
    ],
);
```
*/
#[track_caller]
pub fn assert_equal<'a, R: Reporter + ?Sized>(
    reporter: &mut R,
    label: &str,
    expected: impl Into<Value<'a>>,
    actual: impl Into<Value<'a>>,
) -> bool {
    let expected = expected.into();
    let actual = actual.into();

    if !check_kinds(reporter, label, expected.kind(), actual.kind()) {
        return false;
    }

    if expected == actual {
        return true;
    }

    let message = Diagnostic::new(&label)
        .field("Expected", &expected)
        .field("Actual", &actual);

    reporter.report_failure(format_args!("{message}"));
    false
}

#[cfg(test)]
mod test_assert_equal_types {
    use super::assert_equal_types;
    use crate::{testing::panic_location, Panicking, Recorder};

    #[test]
    fn fails() {
        let mut recorder = Recorder::new();
        assert!(!assert_equal_types(&mut recorder, "UT Name", "", true));
        assert_eq!(
            recorder.failures(),
            ["\nUT Name:         UT Name\nExpected (type): string\nActual (type):   bool"]
        );
    }

    #[test]
    fn passes() {
        let mut recorder = Recorder::new();
        assert!(assert_equal_types(&mut recorder, "UT Name", true, false));
        assert!(!recorder.is_failed());
    }

    #[test]
    fn ignores_values() {
        let mut recorder = Recorder::new();
        assert!(assert_equal_types(&mut recorder, "UT Name", "a", String::from("b")));
        assert!(assert_equal_types(&mut recorder, "UT Name", 1.5f64, f64::NAN));
        assert!(!recorder.is_failed());
    }

    #[test]
    fn nil() {
        let mut recorder = Recorder::new();
        assert!(!assert_equal_types(&mut recorder, "maybe", None::<i64>, 3i64));
        assert_eq!(
            recorder.last_failure(),
            Some("\nUT Name:         maybe\nExpected (type): <nil>\nActual (type):   int64")
        );
    }

    #[test]
    fn panics_at_caller() {
        let line = line!() + 1;
        let location = panic_location(|| assert_equal_types(&mut Panicking, "UT Name", 1u8, 'x'));
        assert_eq!(location, Some((file!().to_owned(), line)));
    }
}
