pub mod bincue;
pub mod cd;
pub mod wav;
