pub mod bullet;
pub mod header;
pub mod numbered;

pub use bullet::Bullet;
pub use header::Header;
pub use numbered::NumberedItem;
