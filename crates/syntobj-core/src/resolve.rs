//! Category group resolution: filtering the engine's captures down to the
//! requested categories.

use crate::capture::Capture;
use crate::category::{CategoryGroup, GroupMode};

/// Keeps the captures whose category belongs to `group`.
///
/// Emission order is preserved. In [`GroupMode::Union`] every member's
/// captures survive. In [`GroupMode::FirstMatch`] only the captures of the
/// first listed member that matched anything survive. No match produces an
/// empty vector rather than an error.
#[must_use]
pub fn resolve_captures<N, I>(group: &CategoryGroup, captures: I) -> Vec<Capture<N>>
where
    I: IntoIterator<Item = Capture<N>>,
{
    let members: Vec<Capture<N>> = captures
        .into_iter()
        .filter(|capture| group.contains(capture.category()))
        .collect();

    match group.mode() {
        GroupMode::Union => members,
        GroupMode::FirstMatch => {
            let Some(winner) = group
                .names()
                .iter()
                .find(|name| members.iter().any(|capture| capture.category() == *name))
            else {
                return Vec::new();
            };
            members
                .into_iter()
                .filter(|capture| capture.category() == winner)
                .collect()
        }
    }
}
