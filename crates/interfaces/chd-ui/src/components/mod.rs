pub mod command;
pub mod forms;
pub mod header;
pub mod readout;
