mod fake_authorization;
mod fake_home;
mod fake_identity;
mod fake_repository;
mod fake_settings;

pub use self::fake_authorization::FakeAuthorization;
pub use self::fake_home::FakeHome;
pub use self::fake_identity::FakeIdentity;
pub use self::fake_repository::FakeRepository;
pub use self::fake_settings::FakeSettings;
