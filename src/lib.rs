pub mod building;
pub mod language;
pub mod output;
pub mod rendering;
pub mod solver;
