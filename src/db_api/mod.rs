pub mod consts;
pub mod create;
pub mod db_connection;
pub mod structs;
