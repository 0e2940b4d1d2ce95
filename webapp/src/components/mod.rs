pub mod contact;
pub mod navigation;
