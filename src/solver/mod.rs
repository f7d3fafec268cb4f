//! Minimum flight time for a craft pushed around by two successive winds
//!
//! The craft can move in any direction at up to `v_max` relative to the
//! air. For the first `first_wind_time` units the air moves at `(ux, uy)`,
//! afterwards at `(wx, wy)`. Whether the target can be reached by time `t`
//! is monotone in `t`, so the answer is found by bisection.

use std::io::Read;
use std::num::ParseIntError;

use thiserror::Error;
use tracing::debug;

const LEFT_INITIAL: f64 = 0.0;
const RIGHT_INITIAL: f64 = 1e9;
const ITERATIONS: usize = 100;

/// Number of integers expected on input.
pub const FIELDS: usize = 10;

/// Problem parameters. The start point has already been subtracted, so
/// `(x, y)` is the displacement still to be covered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub x: f64,
    pub y: f64,
    pub v_max: f64,
    pub first_wind_time: f64,
    pub ux: f64,
    pub uy: f64,
    pub wx: f64,
    pub wy: f64,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Expected {expected} integers but found {found}")]
    Missing { expected: usize, found: usize },

    #[error("Not an integer: '{token}'")]
    Malformed {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the ten whitespace separated integers
/// `x1 y1 x2 y2 v_max t ux uy wx wy` describing a problem. Anything after
/// the tenth value is ignored.
pub fn read(mut reader: impl Read) -> Result<Input, InputError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<Input, InputError> {
    let mut values = [0i64; FIELDS];
    let mut found = 0;

    for token in content
        .split_ascii_whitespace()
        .take(FIELDS)
    {
        values[found] = token
            .parse::<i64>()
            .map_err(|source| InputError::Malformed {
                token: token.to_string(),
                source,
            })?;
        found += 1;
    }

    if found < FIELDS {
        return Err(InputError::Missing {
            expected: FIELDS,
            found,
        });
    }

    let [x1, y1, x2, y2, v_max, t, ux, uy, wx, wy] = values.map(|value| value as f64);

    Ok(Input {
        x: x2 - x1,
        y: y2 - y1,
        v_max,
        first_wind_time: t,
        ux,
        uy,
        wx,
        wy,
    })
}

pub struct Solver {
    input: Input,
}

impl Solver {
    pub fn new(input: Input) -> Solver {
        Solver { input }
    }

    /// Bisect over time for the earliest moment the target is reachable.
    pub fn solve(&self) -> f64 {
        let mut left = LEFT_INITIAL;
        let mut right = RIGHT_INITIAL;

        for _ in 0..ITERATIONS {
            let median = (left + right) / 2.0;
            if self.is_valid_time(median) {
                right = median;
            } else {
                left = median;
            }
        }

        debug!("Converged on {} after {} iterations", right, ITERATIONS);
        right
    }

    // With the wind's drift subtracted from the target, what remains must be
    // coverable under our own power.
    fn is_valid_time(&self, time: f64) -> bool {
        let input = &self.input;

        let (x, y) = if time < input.first_wind_time {
            (input.x - time * input.ux, input.y - time * input.uy)
        } else {
            let second = time - input.first_wind_time;
            (
                input.x - input.first_wind_time * input.ux - second * input.wx,
                input.y - input.first_wind_time * input.uy - second * input.wy,
            )
        };

        is_reachable(x, y, input.v_max, time)
    }
}

fn is_reachable(x: f64, y: f64, v_max: f64, time: f64) -> bool {
    x.hypot(y) / v_max <= time
}
