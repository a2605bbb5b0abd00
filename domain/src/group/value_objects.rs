//! Group domain value objects — lookup results

use crate::knob::entities::Knob;

/// A successful [`find_knob`](crate::group::entities::Group::find_knob) hit.
///
/// `path` is the colon-joined chain of group names from the searched group
/// down to the knob's owning group, ending in the knob name itself
/// (e.g. `"root:feature-A:A-X:A-X-val2"`).
#[derive(Debug)]
pub struct KnobMatch<'a> {
    pub path: String,
    pub knob: &'a Knob,
}
