pub mod drag_shear;
pub mod pointer;
