//! Command-line token parsing onto a knob tree.
//!
//! Maps `--name value` / `--flag` / `--no-flag` tokens to typed knob
//! mutations. Pure domain logic — no I/O, no process arguments, just a
//! token slice and a [`Group`].
//!
//! # Grammar
//!
//! | Token shape | Effect |
//! |-------------|--------|
//! | `--<name> <value>` | sets non-boolean knob `<name>` from `<value>` |
//! | `--<name>` | sets boolean knob `<name>` to `true` |
//! | `--no-<name>` | sets boolean knob `<name>` to `false` |
//! | anything else | passed through unconsumed, in order |
//!
//! Boolean options never consume the following token. A matched
//! non-boolean option consumes the next token as its literal value even if
//! that token looks like an option itself.

use crate::group::entities::Group;
use crate::knob::value_objects::KnobKind;
use crate::options::report::{AppliedOption, ParseReport, RejectedOption};

const OPTION_PREFIX: &str = "--";
const NEGATION_MARK: &str = "no-";

/// Parser state: scanning tokens, or holding a matched non-boolean option
/// that awaits its value token.
enum State {
    Scanning,
    ExpectingValue { option: String, name: String },
}

/// Parse `tokens` against `knobs`, mutating matched knobs in place.
///
/// Name resolution and mutation both use the tree's depth-first,
/// first-match-wins order, so a `--x` token addresses the same knob that
/// [`Group::find_knob`] reports for `"x"`. Tokens that map to no knob are
/// returned unchanged in [`ParseReport::unconsumed`]; refused values
/// (malformed text, finalized owning group) are consumed and recorded in
/// [`ParseReport::rejected`].
pub fn parse_options<S: AsRef<str>>(tokens: &[S], knobs: &mut Group) -> ParseReport {
    let mut report = ParseReport::default();
    let mut state = State::Scanning;

    for token in tokens {
        let token = token.as_ref();
        state = match state {
            State::ExpectingValue { option, name } => {
                apply(knobs, &mut report, option, &name, token.to_string());
                State::Scanning
            }
            State::Scanning => scan(token, knobs, &mut report),
        };
    }

    if let State::ExpectingValue { option, .. } = state {
        report.dangling = Some(option);
    }

    report
}

/// Handle one token in scanning state, returning the next state.
fn scan(token: &str, knobs: &mut Group, report: &mut ParseReport) -> State {
    let Some(stripped) = token.strip_prefix(OPTION_PREFIX) else {
        report.unconsumed.push(token.to_string());
        return State::Scanning;
    };

    // `--no-flag` negates a boolean knob named "flag". The negated reading
    // only wins when such a boolean exists, so a knob literally named
    // "no-…" stays addressable through the plain lookup below.
    let negated_bool = stripped.strip_prefix(NEGATION_MARK).filter(|rest| {
        knobs
            .find_knob(rest)
            .is_some_and(|hit| hit.knob.kind() == KnobKind::Bool)
    });
    if let Some(rest) = negated_bool {
        apply(knobs, report, token.to_string(), rest, "false".to_string());
        return State::Scanning;
    }

    match knobs.find_knob(stripped).map(|hit| hit.knob.kind()) {
        None => {
            report.unconsumed.push(token.to_string());
            State::Scanning
        }
        Some(KnobKind::Bool) => {
            apply(knobs, report, token.to_string(), stripped, "true".to_string());
            State::Scanning
        }
        Some(_) => State::ExpectingValue {
            option: token.to_string(),
            name: stripped.to_string(),
        },
    }
}

fn apply(knobs: &mut Group, report: &mut ParseReport, option: String, name: &str, value: String) {
    match knobs.change_value(name, &value) {
        Ok(path) => report.applied.push(AppliedOption {
            option,
            path,
            value,
        }),
        Err(reason) => report.rejected.push(RejectedOption {
            option,
            value,
            reason,
        }),
    }
}
