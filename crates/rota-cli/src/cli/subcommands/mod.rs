mod profile;

pub use profile::ProfileCommands;
