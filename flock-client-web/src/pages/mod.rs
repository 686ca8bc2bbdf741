mod profile;
mod single_hub;

pub use profile::ProfilePage;
pub use single_hub::SingleHub;
