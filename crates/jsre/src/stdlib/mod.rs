// Native classes exposed to scripts
pub mod regexp;
