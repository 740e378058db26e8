pub mod duration;
pub mod track;
