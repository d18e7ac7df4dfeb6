//! Small typed helpers over slices and sequences.

pub const DEFAULT_ZOOM_FACTOR: usize = 2;

/// Repeat every element `factor` times in place, keeping the original order.
///
/// `zoom_array(&[12, 72, 91], 2)` gives `[12, 12, 72, 72, 91, 91]`.
pub fn zoom_array<T: Clone>(items: &[T], factor: usize) -> Vec<T> {
    let mut zoomed = Vec::with_capacity(items.len().saturating_mul(factor));
    for item in items {
        zoomed.extend(std::iter::repeat(item).take(factor).cloned());
    }
    zoomed
}

/// Anything with a length in elements. Strings count characters, not bytes.
pub trait Sequence {
    fn sequence_len(&self) -> usize;
}

impl Sequence for str {
    fn sequence_len(&self) -> usize {
        self.chars().count()
    }
}

impl Sequence for String {
    fn sequence_len(&self) -> usize {
        self.as_str().sequence_len()
    }
}

impl<T> Sequence for [T] {
    fn sequence_len(&self) -> usize {
        self.len()
    }
}

impl<T> Sequence for Vec<T> {
    fn sequence_len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    fn sequence_len(&self) -> usize {
        N
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    fn sequence_len(&self) -> usize {
        (**self).sequence_len()
    }
}

/// Pair each sequence with its length.
pub fn element_length<I, S>(items: I) -> Vec<(S, usize)>
where
    I: IntoIterator<Item = S>,
    S: Sequence,
{
    items
        .into_iter()
        .map(|item| {
            let len = item.sequence_len();
            (item, len)
        })
        .collect()
}
