use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::{self, Display, Write};

/// Glue used when none is configured.
pub const DEFAULT_GLUE: &str = ",";

type BoxedFormatter<'a, T> = Box<dyn Fn(&T) -> String + 'a>;

/// Settings for [`join_to_string`] and [`write_joined`].
///
/// Every field is optional:
/// - glue defaults to [`DEFAULT_GLUE`]
/// - prefix and suffix default to the empty string
/// - without a formatter, elements render through their `Display` impl
///
/// A formatter takes precedence: when one is set, prefix and suffix are
/// ignored.
///
/// # Examples
/// ```
/// use lazy_seq::{join_to_string, JoinOptions};
///
/// let quoted = JoinOptions::new().glue("-").quotes("[", "]");
/// assert_eq!(join_to_string(["a", "b"], &quoted), "[a]-[b]");
///
/// let formatted = JoinOptions::new().formatter(|x: &i32| format!("v{x}"));
/// assert_eq!(join_to_string([1, 2], &formatted), "v1,v2");
/// ```
pub struct JoinOptions<'a, T> {
    glue: Option<&'a str>,
    prefix: Option<&'a str>,
    suffix: Option<&'a str>,
    formatter: Option<BoxedFormatter<'a, T>>,
}

impl<'a, T> JoinOptions<'a, T> {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self {
            glue: None,
            prefix: None,
            suffix: None,
            formatter: None,
        }
    }

    /// Sets the separator placed between consecutive elements.
    #[must_use]
    pub fn glue(mut self, glue: &'a str) -> Self {
        self.glue = Some(glue);
        self
    }

    /// Sets the text written before each element.
    #[must_use]
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Sets the text written after each element.
    #[must_use]
    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// Sets both the prefix and the suffix.
    #[must_use]
    pub fn quotes(self, prefix: &'a str, suffix: &'a str) -> Self {
        self.prefix(prefix).suffix(suffix)
    }

    /// Renders each element with `formatter` instead of `Display`.
    #[must_use]
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&T) -> String + 'a,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    fn glue_or_default(&self) -> &'a str {
        self.glue.unwrap_or(DEFAULT_GLUE)
    }
}

impl<T> Default for JoinOptions<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JoinOptions<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinOptions")
            .field("glue", &self.glue)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("has_formatter", &self.formatter.is_some())
            .finish()
    }
}

/// `Display` adapter that renders a missing value as `null`.
///
/// ```
/// use lazy_seq::{OrNull, SequenceExt};
///
/// let values = [Some(1), None, Some(3)];
/// let text = values.iter().map(Option::as_ref).map(OrNull::from).join_with(",");
/// assert_eq!(text, "1,null,3");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrNull<T>(pub Option<T>);

impl<T> From<Option<T>> for OrNull<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: Display> Display for OrNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

fn write_items<W, I, R>(out: &mut W, source: I, glue: &str, mut render: R) -> fmt::Result
where
    W: Write,
    I: IntoIterator,
    R: FnMut(&mut W, &I::Item) -> fmt::Result,
{
    let mut use_glue = false;
    for item in source {
        if use_glue {
            out.write_str(glue)?;
        } else {
            use_glue = true;
        }
        render(out, &item)?;
    }
    Ok(())
}

/// Writes the joined elements of `source` into `out`.
///
/// Produces exactly the text [`join_to_string`] returns. Errors come only
/// from `out` or from an element's `Display` impl.
pub fn write_joined<W, I>(
    out: &mut W,
    source: I,
    options: &JoinOptions<'_, I::Item>,
) -> fmt::Result
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let glue = options.glue_or_default();
    match &options.formatter {
        Some(formatter) => write_items(out, source, glue, |out, item| {
            out.write_str(&formatter(item))
        }),
        None => {
            let prefix = options.prefix.unwrap_or_default();
            let suffix = options.suffix.unwrap_or_default();
            write_items(out, source, glue, |out, item| {
                write!(out, "{prefix}{item}{suffix}")
            })
        }
    }
}

/// Consumes `source` and joins its elements into one string.
///
/// Glue goes between consecutive elements only, so an empty source gives an
/// empty string.
///
/// # Examples
/// ```
/// use lazy_seq::{join_to_string, JoinOptions};
///
/// assert_eq!(join_to_string([1, 2, 3], &JoinOptions::new()), "1,2,3");
/// assert_eq!(join_to_string(Vec::<i32>::new(), &JoinOptions::new()), "");
/// ```
pub fn join_to_string<I>(source: I, options: &JoinOptions<'_, I::Item>) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    // Writing into a `String` only fails if an element's `Display` impl does;
    // the text written up to that point is kept.
    let _ = write_joined(&mut out, source, options);
    out
}

pub(crate) fn join_formatted<I, F>(source: I, glue: &str, formatter: F) -> String
where
    I: IntoIterator,
    F: Fn(&I::Item) -> String,
{
    let mut out = String::new();
    let _ = write_items(&mut out, source, glue, |out, item| {
        out.write_str(&formatter(item))
    });
    out
}
