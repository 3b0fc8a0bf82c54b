use std::fmt::{self, Display, Formatter};

/// The key of the first field of every diagnostic, which holds the check's
/// label.
pub const LABEL_KEY: &str = "UT Name";

/// A failure message made of aligned `key: value` lines.
///
/// This is the format used by every checker in this crate, made public so
/// that custom checks can report failures that look the same. The message
/// always starts with the label (under the `UT Name` key), followed by the
/// fields in the order they were added:
///
/// - Each field is on its own line, including the first; the message starts
///   with a newline and doesn't end with one.
/// - The values of all the fields are visually aligned, one space past the
///   longest `key:`.
///
/// # Example
///
/// ```
/// use ut_asserts::Diagnostic;
///
/// let message = Diagnostic::new(&"parses header")
///     .field("Expected (len)", &4)
///     .field("Actual (len)", &3)
///     .to_string();
///
/// assert_eq!(
///     message,
///     "\nUT Name:        parses header\nExpected (len): 4\nActual (len):   3",
/// );
/// ```
#[derive(Clone)]
pub struct Diagnostic<'a> {
    fields: Vec<(&'a str, &'a dyn Display)>,
}

impl<'a> Diagnostic<'a> {
    #[must_use]
    pub fn new(label: &'a dyn Display) -> Self {
        Self {
            fields: vec![(LABEL_KEY, label)],
        }
    }

    #[must_use]
    pub fn field(mut self, key: &'a str, value: &'a dyn Display) -> Self {
        self.fields.push((key, value));
        self
    }

    /// Width of the longest key in characters, which is where every value is
    /// aligned to.
    fn padding(&self) -> usize {
        self.fields
            .iter()
            .map(|&(key, _)| key.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The colon sticks to the key, so the value column is one past the
        // longest "key:"
        let padding = self.padding() + 1;

        self.fields.iter().try_for_each(|&(key, value)| {
            write!(f, "\n{key:<padding$} {value}", key = Colon(key))
        })
    }
}

/// Displays a key followed by a colon, respecting width and alignment.
struct Colon<'a>(&'a str);

impl Display for Colon<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);
        let fill = width.saturating_sub(self.0.chars().count() + 1);
        write!(f, "{}:{:fill$}", self.0, "")
    }
}
