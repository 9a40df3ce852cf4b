use std::borrow::Cow;

/// A value that can be stored in a filter.
///
/// Filters never see the native type, only the canonical bytes. Two values
/// with equal canonical bytes are the same item as far as a filter is
/// concerned, e.g. `42u32` and `"42"`.
pub trait Item {
    fn canonical_bytes(&self) -> Cow<'_, [u8]>;
}

impl Item for str {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Item for String {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Item for [u8] {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Item for Vec<u8> {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<const N: usize> Item for [u8; N] {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Item + ?Sized> Item for &T {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        (**self).canonical_bytes()
    }
}

// scalars are keyed by their display text
macro_rules! display_item {
    ($($t:ty),* $(,)?) => {
        $(
            impl Item for $t {
                fn canonical_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_string().into_bytes())
                }
            }
        )*
    };
}

display_item!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);
