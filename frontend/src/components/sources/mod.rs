pub mod create_source;
