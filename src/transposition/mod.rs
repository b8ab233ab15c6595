pub mod instruments;
pub mod lookup_table;
pub mod score_transpose;
pub mod semitone_transpose;

pub use instruments::{instrument_table, semitones_for, Instrument, InstrumentFamily, InstrumentInfo};
pub use lookup_table::{fifths_delta, transpose_key, FIFTHS_DELTA};
pub use score_transpose::{transpose, transpose_for_instrument};
pub use semitone_transpose::transpose_pitch;
