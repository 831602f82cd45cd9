pub mod dtmf;
