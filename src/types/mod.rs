mod cell;
mod errors;
mod observation;
mod std_convention;

pub use cell::*;
pub use errors::*;
pub use observation::*;
pub use std_convention::*;
