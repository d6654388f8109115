//! Raw input accepted by the pipeline.
//!
//! Every pipeline entry point takes `impl RawText`, so callers can pass
//! string slices, owned strings, numbers, or an `Option` where `None`
//! stands for an absent value.

use std::borrow::Cow;

/// A value that can be read as text by the normalizer.
///
/// Absent values (`None`) read as the empty string. Non-string values read
/// as their `Display` rendering.
///
/// # Example
///
/// ```
/// use trigram_core::analyzer::input::RawText;
///
/// assert_eq!("abc".raw_text(), "abc");
/// assert_eq!(42u8.raw_text(), "42");
/// assert_eq!(None::<&str>.raw_text(), "");
/// assert_eq!(Some("abc").raw_text(), "abc");
/// ```
pub trait RawText {
    /// Returns the textual representation of this value.
    fn raw_text(&self) -> Cow<'_, str>;
}

impl RawText for str {
    #[inline]
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl RawText for String {
    #[inline]
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl RawText for Cow<'_, str> {
    #[inline]
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: RawText + ?Sized> RawText for &T {
    #[inline]
    fn raw_text(&self) -> Cow<'_, str> {
        (**self).raw_text()
    }
}

impl<T: RawText> RawText for Option<T> {
    #[inline]
    fn raw_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.raw_text(),
            None => Cow::Borrowed(""),
        }
    }
}

macro_rules! display_raw_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RawText for $ty {
                #[inline]
                fn raw_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_raw_text!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
