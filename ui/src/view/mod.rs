pub mod button;
pub mod cell;
pub mod icon;
pub mod notification;
pub mod text;
pub mod thumbnail;

#[cfg(test)]
pub mod inspect;
