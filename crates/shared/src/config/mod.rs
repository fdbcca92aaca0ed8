mod myconfig;

pub use self::myconfig::{Config, DEFAULT_CLIENT_ID};
