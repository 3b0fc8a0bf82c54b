use crate::{diagnostic::Diagnostic, reporter::Reporter};

#[track_caller]
fn check_bool<R: Reporter + ?Sized>(
    reporter: &mut R,
    label: &str,
    expected: bool,
    actual: bool,
) -> bool {
    if expected == actual {
        return true;
    }

    let message = Diagnostic::new(&label)
        .field("Expected", &expected)
        .field("Actual", &actual);

    reporter.report_failure(format_args!("{message}"));
    false
}

/**
Check that `value` is `true`.

Returns `true` if the check passed. Otherwise, reports a single failure to
`reporter` and returns `false`:

```
use ut_asserts::{assert_true, Recorder};

let mut recorder = Recorder::new();
assert!(assert_true(&mut recorder, "is ready", true));
assert!(!recorder.is_failed());

assert!(!assert_true(&mut recorder, "is ready", false));
assert_eq!(
    recorder.last_failure(),
    Some("\nUT Name:  is ready\nExpected: true\nActual:   false"),
);
```
*/
#[track_caller]
pub fn assert_true<R: Reporter + ?Sized>(reporter: &mut R, label: &str, value: bool) -> bool {
    check_bool(reporter, label, true, value)
}

/// Check that `value` is `false`.
///
/// This is the mirror image of [`assert_true`]; the failure message reports
/// `false` as the expected value.
#[track_caller]
pub fn assert_false<R: Reporter + ?Sized>(reporter: &mut R, label: &str, value: bool) -> bool {
    check_bool(reporter, label, false, value)
}
