pub mod input_buffer;
pub mod stat_bars;
