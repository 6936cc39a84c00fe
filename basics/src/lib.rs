//! Small strongly typed helpers.
//!
//! Pure functions over scalars and sequences. Nothing here allocates beyond
//! its return value, performs IO, or panics on any input.

mod scalars;
mod sequences;

pub use scalars::{A, I_UNDERSTAND_ANNOTATIONS, PI, SCHOOL, add, concat, floor, to_str};
pub use sequences::{
    DEFAULT_ZOOM_FACTOR, Number, element_length, make_multiplier, safe_first_element,
    safely_get_value, sum_list, sum_mixed_list, to_kv, zoom_array,
};
