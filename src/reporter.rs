use std::fmt::{self, Write as _};

/// A place to send assertion failures.
///
/// This is the only capability the checkers in this crate need from the
/// host test framework. A checker calls [`report_failure`][Self::report_failure]
/// exactly once when it fails and never when it passes; what happens next
/// (recording the message, flagging the test, panicking) is entirely up to
/// the implementation.
///
/// # Example
///
/// ```
/// use std::fmt;
/// use ut_asserts::{assert_true, Reporter};
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl Reporter for Counter {
///     fn report_failure(&mut self, _message: fmt::Arguments<'_>) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = Counter::default();
/// assert_true(&mut counter, "first", true);
/// assert_true(&mut counter, "second", false);
/// assert_eq!(counter.0, 1);
/// ```
pub trait Reporter {
    /// Report a single, fully formatted failure.
    fn report_failure(&mut self, message: fmt::Arguments<'_>);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    #[inline]
    #[track_caller]
    fn report_failure(&mut self, message: fmt::Arguments<'_>) {
        (**self).report_failure(message)
    }
}

/// Appends every failure message to the string.
impl Reporter for String {
    fn report_failure(&mut self, message: fmt::Arguments<'_>) {
        // Writing into a String can't fail
        let _ = self.write_fmt(message);
    }
}

/// Report a failure with a printf-style message.
///
/// `report_failure!(reporter, "fmt", args...)` is shorthand for calling
/// [`Reporter::report_failure`] with `format_args!("fmt", args...)`. It's
/// intended for writing custom checks on top of any [`Reporter`].
///
/// ```
/// use ut_asserts::{report_failure, Recorder};
///
/// let mut recorder = Recorder::new();
/// report_failure!(recorder, "{} != {}", 1, 2);
/// assert_eq!(recorder.last_failure(), Some("1 != 2"));
/// ```
#[macro_export]
macro_rules! report_failure {
    ($reporter:expr, $($fmt:tt)+) => {
        $crate::Reporter::report_failure(&mut $reporter, ::std::format_args!($($fmt)+))
    };
}

/// A [`Reporter`] that keeps every failure it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    failures: Vec<String>,
}

impl Recorder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All the failure messages reported so far, in order.
    #[inline]
    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    #[inline]
    #[must_use]
    pub fn last_failure(&self) -> Option<&str> {
        self.failures.last().map(String::as_str)
    }

    /// True if anything was reported.
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn into_failures(self) -> Vec<String> {
        self.failures
    }
}

impl Reporter for Recorder {
    fn report_failure(&mut self, message: fmt::Arguments<'_>) {
        self.failures.push(message.to_string());
    }
}

/// A [`Reporter`] that panics on the first failure.
///
/// This is the way to use the checkers from an ordinary `#[test]` function:
/// the panic fails the test, and the panic message contains the failure,
/// indented under an `assertion failed:` header.
///
/// ```should_panic
/// use ut_asserts::{assert_equal, Panicking};
///
/// assert_equal(&mut Panicking, "answer", 41, 42);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panicking;

impl Reporter for Panicking {
    #[track_caller]
    fn report_failure(&mut self, message: fmt::Arguments<'_>) {
        panic!(
            "assertion failed:{}",
            indent_write::indentable::Indented {
                item: message,
                indent: "  ",
            }
        )
    }
}

/// A [`Reporter`] that logs each failure as a [`tracing`] error event before
/// forwarding it to another reporter.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct Traced<R> {
    inner: R,
}

#[cfg(feature = "tracing")]
impl<R> Traced<R> {
    #[inline]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn inner(&self) -> &R {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "tracing")]
impl<R: Reporter> Reporter for Traced<R> {
    #[track_caller]
    fn report_failure(&mut self, message: fmt::Arguments<'_>) {
        tracing::error!(target: "ut_asserts", failure = %message, "assertion failed");
        self.inner.report_failure(message);
    }
}



#[cfg(test)]
mod test_panicking {
    use std::panic::catch_unwind;

    use super::Panicking;

    // A couple of should_panic tests establish that the reporter panics at all
    // before the message itself is inspected.
    #[test]
    #[should_panic(expected = "assertion failed:")]
    fn panics() {
        report_failure!(Panicking, "oops");
    }

    #[test]
    #[should_panic(expected = "\n  Expected: 1\n  Actual:   2")]
    fn indents_each_line() {
        report_failure!(Panicking, "\nExpected: {}\nActual:   {}", 1, 2);
    }

    #[test]
    fn message() {
        let panic = catch_unwind(|| report_failure!(Panicking, "\nUT Name:  {}", "label"))
            .expect_err("reporter didn't panic");

        let message = panic
            .downcast_ref::<String>()
            .expect("panic message wasn't a String");

        assert_eq!(message, "assertion failed:\n  UT Name:  label");
    }
}
