//! String joining and map rendering.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use crate::error::{CollectionError, Result};

/// Join string-like items with `separator`.
pub fn joined<I, S>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Join string-like items one per line.
pub fn joined_lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    joined(items, "\n")
}

/// A value that can appear on the right-hand side of a rendered map entry.
///
/// Maps implement it too, so nested maps render recursively.
pub trait EntryDisplay {
    fn write_entry(&self, out: &mut String, separator: &str);
}

/// A map that [`format_map`] can render.
pub trait DisplayMap {
    fn write_map(&self, out: &mut String, separator: &str);
}

macro_rules! display_entry {
    ($($ty:ty),* $(,)?) => {
        $(impl EntryDisplay for $ty {
            fn write_entry(&self, out: &mut String, _separator: &str) {
                out.push_str(&self.to_string());
            }
        })*
    };
}

display_entry!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl EntryDisplay for str {
    fn write_entry(&self, out: &mut String, _separator: &str) {
        out.push_str(self);
    }
}

impl<T: EntryDisplay + ?Sized> EntryDisplay for &T {
    fn write_entry(&self, out: &mut String, separator: &str) {
        (**self).write_entry(out, separator);
    }
}

/// An empty slot renders as nothing.
impl<T: EntryDisplay> EntryDisplay for Option<T> {
    fn write_entry(&self, out: &mut String, separator: &str) {
        if let Some(value) = self {
            value.write_entry(out, separator);
        }
    }
}

fn write_entries<'a, K, V>(
    entries: impl Iterator<Item = (&'a K, &'a V)>,
    out: &mut String,
    separator: &str,
) where
    K: Display + 'a,
    V: EntryDisplay + 'a,
{
    out.push('{');
    let mut any = false;
    for (key, value) in entries {
        any = true;
        out.push_str(&key.to_string());
        out.push_str(separator);
        value.write_entry(out, separator);
        out.push(',');
    }
    if any {
        // trailing comma
        out.pop();
    }
    out.push('}');
}

impl<K: Display, V: EntryDisplay, S> DisplayMap for HashMap<K, V, S> {
    fn write_map(&self, out: &mut String, separator: &str) {
        write_entries(self.iter(), out, separator);
    }
}

impl<K: Display, V: EntryDisplay> DisplayMap for BTreeMap<K, V> {
    fn write_map(&self, out: &mut String, separator: &str) {
        write_entries(self.iter(), out, separator);
    }
}

impl<K: Display, V: EntryDisplay, S> EntryDisplay for HashMap<K, V, S> {
    fn write_entry(&self, out: &mut String, separator: &str) {
        self.write_map(out, separator);
    }
}

impl<K: Display, V: EntryDisplay> EntryDisplay for BTreeMap<K, V> {
    fn write_entry(&self, out: &mut String, separator: &str) {
        self.write_map(out, separator);
    }
}

/// Render `source` as `{key<separator>value,...}`; `{}` when empty.
///
/// Nested map values are rendered the same way. An absent `source` is a
/// caller error and is reported as [`CollectionError::NullArgument`].
pub fn format_map<M>(source: Option<&M>, separator: &str) -> Result<String>
where
    M: DisplayMap + ?Sized,
{
    let source = source.ok_or(CollectionError::NullArgument("source"))?;
    let mut out = String::new();
    source.write_map(&mut out, separator);
    Ok(out)
}
