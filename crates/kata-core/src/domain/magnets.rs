//! Run counting over adjacent tokens

/// Count maximal runs of equal adjacent tokens
///
/// The first token opens a run; every token that differs from its
/// predecessor opens another. An empty sequence has no runs.
pub fn count_groups<I, T>(tokens: I) -> usize
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    let mut groups = 0;
    let mut previous: Option<T> = None;

    for current in tokens {
        if previous.as_ref() != Some(&current) {
            groups += 1;
        }
        previous = Some(current);
    }

    groups
}
