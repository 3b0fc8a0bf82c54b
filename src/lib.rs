/*!
Assertions for unit tests that report failures instead of panicking.

Every checker in this crate takes a [`Reporter`], a label naming the check,
and the values being checked. When the check passes, nothing happens; when it
fails, the checker builds a message and hands it to the reporter exactly
once. The reporter decides what a failure means: [`Recorder`] keeps the
messages, [`Panicking`] fails the surrounding `#[test]`, and any test
framework can implement [`Reporter`] itself.

```
use ut_asserts::{assert_equal, assert_true, Recorder};

let mut recorder = Recorder::new();

assert_true(&mut recorder, "connected", true);
assert_equal(&mut recorder, "greeting", "Hello", "Hallo");

assert_eq!(
    recorder.failures(),
    ["\nUT Name:  greeting\nExpected: Hello\nActual:   Hallo"],
);
```
*/

mod diagnostic;
mod equal;
mod reporter;
#[cfg(test)]
mod testing;
mod truth;
mod value;

pub use diagnostic::{Diagnostic, LABEL_KEY};
pub use equal::{assert_equal, assert_equal_types};
#[cfg(feature = "tracing")]
pub use reporter::Traced;
pub use reporter::{Panicking, Recorder, Reporter};
pub use truth::{assert_false, assert_true};
pub use value::{Kind, Value};
